use fotoedit_core::catalog::{ChainOp, FilterCatalog, FilterPreset, OpKind, OpUnit};
use fotoedit_core::compose::{chain_to_string, resolve_chain, Adjustments};

fn magnitudes(chain: &[ChainOp]) -> Vec<f32> {
    chain
        .iter()
        .filter_map(|op| match op {
            ChainOp::Filter { value, .. } => Some(*value),
            ChainOp::Raw(_) => None,
        })
        .collect()
}

/// Preset segment = everything before the three appended adjustment ops.
fn preset_segment(chain: &[ChainOp]) -> &[ChainOp] {
    &chain[..chain.len() - 3]
}

#[test]
fn test_identity_preset_yields_only_adjustments() {
    let catalog = FilterCatalog::builtin();
    for intensity in [0.0, 50.0, 100.0] {
        let chain = resolve_chain(catalog.identity(), intensity, &Adjustments::default());
        assert_eq!(
            chain,
            vec![
                ChainOp::filter(OpKind::Brightness, 100.0, OpUnit::Percent),
                ChainOp::filter(OpKind::Contrast, 100.0, OpUnit::Percent),
                ChainOp::filter(OpKind::Saturate, 100.0, OpUnit::Percent),
            ]
        );
    }
}

#[test]
fn test_zero_intensity_zeroes_preset_ops_only() {
    let catalog = FilterCatalog::builtin();
    let adjustments = Adjustments {
        brightness: 120.0,
        contrast: 80.0,
        saturation: 150.0,
    };
    for preset in catalog.presets() {
        let chain = resolve_chain(preset, 0.0, &adjustments);
        for op in preset_segment(&chain) {
            match op {
                ChainOp::Filter { value, .. } => assert_eq!(*value, 0.0),
                ChainOp::Raw(_) => {}
            }
        }
        // Adjustment tail keeps its own slider values.
        let tail = &chain[chain.len() - 3..];
        assert_eq!(magnitudes(tail), vec![120.0, 80.0, 150.0]);
    }
}

#[test]
fn test_intensity_scaling_is_linear() {
    let catalog = FilterCatalog::builtin();
    let adj = Adjustments::default();
    for preset in catalog.presets() {
        let at_40 = resolve_chain(preset, 40.0, &adj);
        let at_80 = resolve_chain(preset, 80.0, &adj);
        let lo = magnitudes(preset_segment(&at_40));
        let hi = magnitudes(preset_segment(&at_80));
        assert_eq!(lo.len(), hi.len());
        for (a, b) in lo.iter().zip(hi.iter()) {
            approx::assert_relative_eq!(*b, a * 2.0, max_relative = 1e-6);
        }
    }
}

#[test]
fn test_full_intensity_reproduces_baseline() {
    let golden = FilterCatalog::builtin().get("golden").unwrap();
    let chain = resolve_chain(golden, 100.0, &Adjustments::default());
    assert_eq!(preset_segment(&chain), &golden.chain[..]);
}

#[test]
fn test_scaling_applies_to_all_units() {
    let lilac = FilterCatalog::builtin().get("lilac").unwrap();
    let chain = resolve_chain(lilac, 50.0, &Adjustments::default());
    // hue-rotate(260deg) -> 130deg, saturate(0.9) -> 0.45, brightness(1.1) -> 0.55
    assert_eq!(
        preset_segment(&chain),
        &[
            ChainOp::filter(OpKind::HueRotate, 130.0, OpUnit::Degrees),
            ChainOp::filter(OpKind::Saturate, 0.45, OpUnit::Unitless),
            ChainOp::filter(OpKind::Brightness, 0.55, OpUnit::Unitless),
        ]
    );
}

#[test]
fn test_adjustments_are_never_intensity_scaled() {
    let golden = FilterCatalog::builtin().get("golden").unwrap();
    let adjustments = Adjustments {
        brightness: 130.0,
        contrast: 70.0,
        saturation: 200.0,
    };
    for intensity in [0.0, 25.0, 100.0] {
        let chain = resolve_chain(golden, intensity, &adjustments);
        let tail = &chain[chain.len() - 3..];
        assert_eq!(
            tail,
            &[
                ChainOp::filter(OpKind::Brightness, 130.0, OpUnit::Percent),
                ChainOp::filter(OpKind::Contrast, 70.0, OpUnit::Percent),
                ChainOp::filter(OpKind::Saturate, 200.0, OpUnit::Percent),
            ]
        );
    }
}

#[test]
fn test_raw_tokens_pass_through_unscaled() {
    let preset = FilterPreset {
        id: "custom".to_string(),
        name: "Custom".to_string(),
        chain: vec![
            ChainOp::filter(OpKind::Sepia, 0.5, OpUnit::Unitless),
            ChainOp::Raw("blur(4px)".to_string()),
        ],
    };
    let chain = resolve_chain(&preset, 50.0, &Adjustments::default());
    assert_eq!(chain[0], ChainOp::filter(OpKind::Sepia, 0.25, OpUnit::Unitless));
    assert_eq!(chain[1], ChainOp::Raw("blur(4px)".to_string()));
}

#[test]
fn test_out_of_range_inputs_are_clamped() {
    let golden = FilterCatalog::builtin().get("golden").unwrap();
    let over = resolve_chain(golden, 150.0, &Adjustments::default());
    let full = resolve_chain(golden, 100.0, &Adjustments::default());
    assert_eq!(over, full);

    let wild = Adjustments {
        brightness: 400.0,
        contrast: -10.0,
        saturation: 100.0,
    };
    let chain = resolve_chain(golden, 100.0, &wild);
    let tail = magnitudes(&chain[chain.len() - 3..]);
    assert_eq!(tail, vec![200.0, 0.0, 100.0]);
}

#[test]
fn test_chain_to_string_render() {
    let lilac = FilterCatalog::builtin().get("lilac").unwrap();
    let chain = resolve_chain(lilac, 100.0, &Adjustments::default());
    assert_eq!(
        chain_to_string(&chain),
        "hue-rotate(260deg) saturate(0.9) brightness(1.1) brightness(100%) contrast(100%) saturate(100%)"
    );
}
