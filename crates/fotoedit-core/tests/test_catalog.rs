use fotoedit_core::catalog::{
    parse_chain, ChainOp, FilterCatalog, OpKind, OpUnit, IDENTITY_PRESET_ID,
};

// ---------------------------------------------------------------------------
// Chain parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_unitless_token() {
    let chain = parse_chain("sepia(0.4)");
    assert_eq!(chain, vec![ChainOp::filter(OpKind::Sepia, 0.4, OpUnit::Unitless)]);
}

#[test]
fn test_parse_degree_token() {
    let chain = parse_chain("hue-rotate(-30deg)");
    assert_eq!(
        chain,
        vec![ChainOp::filter(OpKind::HueRotate, -30.0, OpUnit::Degrees)]
    );
}

#[test]
fn test_parse_percent_token() {
    let chain = parse_chain("brightness(110%)");
    assert_eq!(
        chain,
        vec![ChainOp::filter(OpKind::Brightness, 110.0, OpUnit::Percent)]
    );
}

#[test]
fn test_parse_multi_token_chain_keeps_order() {
    let chain = parse_chain("sepia(0.2) saturate(1.2) hue-rotate(-30deg) brightness(1.1)");
    assert_eq!(chain.len(), 4);
    assert_eq!(chain[0], ChainOp::filter(OpKind::Sepia, 0.2, OpUnit::Unitless));
    assert_eq!(chain[2], ChainOp::filter(OpKind::HueRotate, -30.0, OpUnit::Degrees));
    assert_eq!(chain[3], ChainOp::filter(OpKind::Brightness, 1.1, OpUnit::Unitless));
}

#[test]
fn test_malformed_tokens_become_raw() {
    // Unknown operator name, missing paren, non-numeric argument: all kept
    // verbatim instead of failing the parse.
    for token in ["blur(4px)", "sepia0.4", "sepia(abc)", "frobnicate(1)"] {
        let chain = parse_chain(token);
        assert_eq!(chain, vec![ChainOp::Raw(token.to_string())], "token: {token}");
    }
}

#[test]
fn test_raw_token_display_roundtrip() {
    let op = ChainOp::filter(OpKind::HueRotate, 195.0, OpUnit::Degrees);
    assert_eq!(op.to_string(), "hue-rotate(195deg)");
    let raw = ChainOp::Raw("blur(4px)".to_string());
    assert_eq!(raw.to_string(), "blur(4px)");
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[test]
fn test_builtin_catalog_has_identity_first() {
    let catalog = FilterCatalog::builtin();
    assert_eq!(catalog.identity().id, IDENTITY_PRESET_ID);
    assert!(catalog.identity().is_identity());
    assert!(catalog.identity().chain.is_empty());
}

#[test]
fn test_builtin_catalog_presets_all_parse_structured() {
    // Every built-in preset token must parse into a structured operator;
    // a Raw token here would mean a typo in the catalog.
    for preset in FilterCatalog::builtin().presets() {
        for op in &preset.chain {
            assert!(
                matches!(op, ChainOp::Filter { .. }),
                "unparsed token {op} in preset {}",
                preset.id
            );
        }
    }
}

#[test]
fn test_catalog_lookup() {
    let catalog = FilterCatalog::builtin();
    assert_eq!(catalog.get("golden").unwrap().name, "Golden");
    assert!(catalog.get("nope").is_none());
}

#[test]
fn test_unknown_preset_falls_back_to_identity() {
    let catalog = FilterCatalog::builtin();
    assert!(catalog.get_or_identity("does-not-exist").is_identity());
}

#[test]
fn test_require_errors_on_unknown_preset() {
    let catalog = FilterCatalog::builtin();
    assert!(catalog.require("golden").is_ok());
    let err = catalog.require("does-not-exist").unwrap_err();
    assert!(matches!(
        err,
        fotoedit_core::error::EditError::UnknownPreset(id) if id == "does-not-exist"
    ));
}

#[test]
fn test_golden_preset_chain() {
    let golden = FilterCatalog::builtin().get("golden").unwrap();
    assert_eq!(
        golden.chain,
        vec![
            ChainOp::filter(OpKind::Sepia, 0.4, OpUnit::Unitless),
            ChainOp::filter(OpKind::Saturate, 1.5, OpUnit::Unitless),
            ChainOp::filter(OpKind::Brightness, 1.1, OpUnit::Unitless),
            ChainOp::filter(OpKind::Contrast, 1.1, OpUnit::Unitless),
        ]
    );
}
