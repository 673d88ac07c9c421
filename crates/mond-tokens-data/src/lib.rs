// mond-tokens-data: Serde structs for design-token JSON documents
pub mod model;

#[cfg(test)]
mod tests {
    use super::model::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_primitive_palette() {
        let data = json!({
            "color": {
                "blue": { "500": "#1890ff", "600": "#096dd9" },
                "white": { "50": "#ffffff" }
            }
        });
        let doc: TokenDocument = serde_json::from_value(data).unwrap();
        let TokenNode::Group(color) = &doc["color"] else {
            panic!("Expected group, got {:?}", doc["color"]);
        };
        let TokenNode::Group(blue) = &color["blue"] else {
            panic!("Expected group");
        };
        assert_eq!(blue["500"], TokenNode::Value("#1890ff".into()));
    }

    #[test]
    fn test_mode_pair_requires_exactly_light_and_dark() {
        let pair: TokenNode =
            serde_json::from_value(json!({ "light": "gray.300", "dark": "#334155" })).unwrap();
        assert_eq!(
            pair,
            TokenNode::Mode(ModePair {
                light: "gray.300".into(),
                dark: "#334155".into(),
            })
        );

        // A sibling key makes it an ordinary group.
        let group: TokenNode = serde_json::from_value(
            json!({ "light": "gray.300", "dark": "#334155", "hover": "gray.400" }),
        )
        .unwrap();
        assert!(group.is_group());

        let half: TokenNode = serde_json::from_value(json!({ "light": "gray.300" })).unwrap();
        assert!(half.is_group());
    }

    #[test]
    fn test_numeric_leaves_keep_json_text() {
        let doc = parse_document(r#"{ "fontWeight": { "bold": 700, "tight": -0.5 } }"#).unwrap();
        let TokenNode::Group(weights) = &doc["fontWeight"] else {
            panic!("Expected group");
        };
        let TokenNode::Value(bold) = &weights["bold"] else {
            panic!("Expected value");
        };
        assert_eq!(bold.raw(), "700");
        let TokenNode::Value(tight) = &weights["tight"] else {
            panic!("Expected value");
        };
        assert_eq!(tight.to_string(), "-0.5");
    }

    #[test]
    fn test_rejects_non_string_leaves() {
        assert!(parse_document(r#"{ "color": { "on": true } }"#).is_err());
        assert!(parse_document(r##"{ "color": { "list": ["#fff"] } }"##).is_err());
        assert!(parse_document(r#"{ "color": null }"#).is_err());
    }

    #[test]
    fn test_merge_reports_replaced_leaves() {
        let mut base = parse_document(
            r##"{ "color": { "brand": { "primary": "#111111", "secondary": "#222222" } } }"##,
        )
        .unwrap();
        let overlay = parse_document(
            r##"{ "color": { "brand": { "primary": "#999999", "accent": "#333333" } } }"##,
        )
        .unwrap();

        let replaced = merge_documents(&mut base, overlay);
        assert_eq!(replaced, vec!["color.brand.primary".to_string()]);

        let expected = parse_document(
            r##"{ "color": { "brand": { "primary": "#999999", "secondary": "#222222", "accent": "#333333" } } }"##,
        )
        .unwrap();
        assert_eq!(base, expected);
    }
}
