//! Typed directives built on top of the parameter map.

#![cfg(feature = "directives")]

use zenquery::ParseError;
use zenquery::directives::{self, ConvertWarning, CropRegion, FitMode, Reverse};

fn directives_of(query: &str) -> directives::DirectiveResult {
    directives::parse(query).unwrap_or_else(|e| panic!("{query:?} failed: {e}"))
}

mod conversion {
    use super::*;

    #[test]
    fn full_query() {
        let result = directives_of(
            "?format=jpeg&progressive=true&w=1200&h=800&fit=crop&scale=2\
             &reverse=flip&q=85&exif=false&crop(x0,y0,w600,h400)",
        );
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        let d = result.directives;
        assert_eq!(d.format.as_deref(), Some("jpeg"));
        assert_eq!(d.progressive, Some(true));
        assert_eq!(d.width, Some(1200));
        assert_eq!(d.height, Some(800));
        assert_eq!(d.fit, Some(FitMode::Crop));
        assert_eq!(d.scale, Some(2.0));
        assert_eq!(d.reverse, Some(Reverse::Flip));
        assert_eq!(d.quality, Some(85));
        assert_eq!(d.exif, Some(false));
        assert_eq!(
            d.crop,
            Some(CropRegion {
                width: Some(600),
                height: Some(400),
                x: Some(0),
                y: Some(0),
            })
        );
        assert!(d.crop.unwrap().is_complete());
    }

    #[test]
    fn skipped_fields_are_silent() {
        let result = directives_of("?aaa=pp&width=10a");
        assert!(result.directives.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn partial_crop_rect() {
        let d = directives_of("?crop(w10,h5)").directives;
        assert_eq!(d.crop.and_then(|c| c.rect()), Some((0, 0, 10, 5)));
        let d = directives_of("?crop(x3)").directives;
        assert_eq!(d.crop.and_then(|c| c.rect()), None);
    }

    #[test]
    fn enum_names_round_trip_through_text() {
        for mode in [FitMode::Clip, FitMode::Scale, FitMode::Max, FitMode::Crop] {
            let d = directives_of(&format!("?fit={}", mode.as_str())).directives;
            assert_eq!(d.fit, Some(mode));
        }
        for reverse in [Reverse::Flip, Reverse::Flop] {
            let d = directives_of(&format!("?reverse={}", reverse.as_str())).directives;
            assert_eq!(d.reverse, Some(reverse));
        }
    }
}

mod warnings {
    use super::*;

    #[test]
    fn dotted_number_is_kept_in_map_but_warned() {
        let result = directives_of("?width=1.2.3&h=4");
        assert_eq!(result.directives.width, None);
        assert_eq!(result.directives.height, Some(4));
        assert_eq!(
            result.warnings,
            [ConvertWarning::ValueInvalid {
                key: "width",
                value: "1.2.3".to_string(),
                reason: "expected positive integer",
            }]
        );
    }

    #[test]
    fn out_of_range_values() {
        let result = directives_of("?quality=200&width=0&scale=0");
        assert!(result.directives.is_empty());
        let keys: Vec<_> = result
            .warnings
            .iter()
            .map(|w| match w {
                ConvertWarning::ValueInvalid { key, .. } => *key,
                ConvertWarning::KeyNotRecognized { .. } => "unrecognized",
            })
            .collect();
        // Warnings follow map key order.
        assert_eq!(keys, ["quality", "scale", "width"]);
    }

    #[test]
    fn fractional_crop_component() {
        let result = directives_of("?crop(x1.5,y2)");
        let crop = result.directives.crop.expect("y survives");
        assert_eq!(crop.x, None);
        assert_eq!(crop.y, Some(2));
        assert!(matches!(
            result.warnings.as_slice(),
            [ConvertWarning::ValueInvalid { key: "crop.x", .. }]
        ));
    }
}

mod errors {
    use super::*;

    #[test]
    fn syntax_errors_pass_through() {
        assert!(matches!(
            directives::parse("?a b"),
            Err(ParseError::Syntax { .. })
        ));
    }
}
