mod common;

#[cfg(test)]
pub mod model_tests {
    use serde_json::json;

    use super::common::*;

    use blockpress::common::*;
    use blockpress::config::SiteConfig;
    use blockpress::models::*;

    #[test]
    fn test_feature_item_known_icon_success() {
        let item: FeatureItem =
            serde_json::from_value(json!({ "headline": "Repo", "icon": "FaGithub" })).unwrap();

        assert_eq!(item.icon, Some(IconName::FaGithub));
        assert_eq!(item.icon.unwrap().css_class(), "fa-brands fa-github");
    }

    #[test]
    fn test_feature_item_unknown_icon_is_dropped() {
        let item: FeatureItem =
            serde_json::from_value(json!({ "headline": "Repo", "icon": "NotARealIcon" })).unwrap();

        assert_eq!(item.icon, None);
        assert_eq!(item.headline(), Some("Repo"));
    }

    #[test]
    fn test_feature_item_missing_fields_default() {
        let item: FeatureItem = serde_json::from_value(json!({})).unwrap();

        assert_eq!(item, FeatureItem::default());
        assert_eq!(item.headline(), None);
        assert_eq!(item.text(), None);
        assert_eq!(item.video_src(), None);
        assert!(!item.has_actions());
    }

    #[test]
    fn test_feature_item_reads_camel_case_fields() {
        let item: FeatureItem = serde_json::from_value(json!({
            "headline": "Preview",
            "text": "Live edits",
            "videoSrc": "demo123",
            "_editPath": "blocks.0.items.0",
            "actions": [{ "label": "Docs", "type": "link", "color": "orange", "link": "/docs" }]
        }))
        .unwrap();

        assert_eq!(item.video_src(), Some("demo123"));
        assert_eq!(item.actions.len(), 1);
        assert_eq!(item.actions[0].kind, ActionKind::Link);
        assert_eq!(item.actions[0].color, ActionColor::Orange);
        assert!(!item.actions[0].icon);
    }

    #[test]
    fn test_feature_item_field_ref_success() {
        let item = get_item_with_video();
        assert_eq!(
            item.field_ref("headline"),
            Some("blocks.0.items.0.headline".to_string())
        );
    }

    #[test]
    fn test_feature_item_field_ref_fails_on_missing_path() {
        let item = get_item_without_video();
        assert_eq!(item.field_ref("headline"), None);
    }

    #[test]
    fn test_feature_item_dom_id_appends_index() {
        let item: FeatureItem =
            serde_json::from_value(json!({ "headline": "Instant Preview" })).unwrap();

        assert_eq!(item.dom_id(0), "instant-preview-0");
        assert_eq!(item.dom_id(3), "instant-preview-3");
    }

    #[test]
    fn test_feature_item_dom_id_never_empty() {
        for raw in [json!({}), json!({ "headline": "   " }), json!({ "headline": "!!!" })] {
            let item: FeatureItem = serde_json::from_value(raw).unwrap();
            assert_eq!(item.dom_id(2), "feature-item-2");
        }
    }

    #[test]
    fn test_feature_item_dom_id_unique_for_repeated_headlines() {
        let item: FeatureItem = serde_json::from_value(json!({ "headline": "Same" })).unwrap();
        let ids: std::collections::HashSet<String> = (0..4).map(|i| item.dom_id(i)).collect();

        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_icon_name_round_trips_every_variant() {
        for icon in IconName::ALL {
            assert_eq!(icon.as_str().parse::<IconName>(), Ok(icon));
            assert_eq!(icon.to_string(), icon.as_str());
            assert!(!icon.css_class().is_empty());
        }
    }

    #[test]
    fn test_icon_name_parse_fails_on_unknown() {
        assert!("NotARealIcon".parse::<IconName>().is_err());
        assert!("fagithub".parse::<IconName>().is_err());
    }

    #[test]
    fn test_action_link_href_defaults_to_root() {
        let mut action = get_item_with_video().actions.remove(0);
        assert_eq!(action.href(), "/docs");

        action.link = Some("  ".to_string());
        assert_eq!(action.href(), "/");

        action.link = None;
        assert_eq!(action.href(), "/");
    }

    #[test]
    fn test_page_from_json_success() {
        let raw = json!({
            "title": "Home",
            "blocks": [
                { "_template": "carouselFeature", "items": [{ "headline": "A" }, { "headline": "B" }] },
                { "_template": "hero", "headline": "Ignored" }
            ]
        })
        .to_string();

        let page = Page::from_json(&raw).unwrap();

        assert_eq!(page.title.as_deref(), Some("Home"));
        assert_eq!(page.blocks.len(), 2);
        assert_eq!(page.blocks[1], PageBlock::Unsupported);

        match &page.blocks[0] {
            PageBlock::CarouselFeature(data) => assert_eq!(data.items.len(), 2),
            other => panic!("expected a carousel block, got {:?}", other),
        }
    }

    #[test]
    fn test_page_from_json_empty_items_success() {
        let page = Page::from_json(r#"{"blocks":[{"_template":"carouselFeature"}]}"#).unwrap();
        assert_eq!(
            page.blocks,
            vec![PageBlock::CarouselFeature(CarouselFeatureData::default())]
        );
    }

    #[test]
    fn test_page_from_json_fails_on_malformed_document() {
        let err = Page::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_sample_home_page_parses() {
        let raw = include_str!("../content/pages/home.json");
        let page = Page::from_json(raw).unwrap();

        assert!(!page.blocks.is_empty());
        for block in &page.blocks {
            match block {
                PageBlock::CarouselFeature(data) => assert!(!data.items.is_empty()),
                PageBlock::Unsupported => panic!("sample page has an unsupported block"),
            }
        }
    }

    #[test]
    fn test_sanitize_label_success() {
        assert_eq!(sanitize_label("Instant Preview"), "instant-preview");
        assert_eq!(sanitize_label("  Git   Backed!  "), "git-backed");
        assert_eq!(sanitize_label("Open-Source_Ready"), "open-source_ready");
        assert_eq!(sanitize_label(""), "");
    }

    #[test]
    fn test_sanitize_label_output_is_valid_slug() {
        for label in ["Instant Preview", "Markdown (MDX) Support", "100% Open"] {
            assert!(validate_slug(&sanitize_label(label)), "{}", label);
        }
    }

    #[test]
    fn test_validate_slug_fails_on_traversal() {
        assert!(!validate_slug("../secrets"));
        assert!(!validate_slug("pages/home"));
        assert!(!validate_slug(""));
        assert!(validate_slug("home"));
    }

    #[test]
    fn test_site_config_defaults() {
        let config = SiteConfig::from_lookup(|_| None);

        assert_eq!(config, SiteConfig::default());
        assert_eq!(
            config.page_path("home"),
            std::path::Path::new("content").join("pages").join("home.json")
        );
    }

    #[test]
    fn test_site_config_reads_overrides() {
        let config = SiteConfig::from_lookup(|key| match key {
            "CONTENT_DIR" => Some("/srv/site".to_string()),
            "DEFAULT_PAGE" => Some("  landing ".to_string()),
            _ => None,
        });

        assert_eq!(config.content_dir, std::path::PathBuf::from("/srv/site"));
        assert_eq!(config.default_page, "landing");
    }
}
