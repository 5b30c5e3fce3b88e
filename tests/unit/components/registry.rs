use super::*;
use crate::foundation::core::Dimensions;

#[test]
fn builtin_registers_canonical_and_legacy_tags() {
    let reg = Registry::builtin().unwrap();
    for kind in ComponentKind::ALL {
        assert_eq!(reg.kind_of(kind.tag()), Some(kind));
        assert_eq!(reg.kind_of(kind.legacy_tag()), Some(kind));
    }
    assert_eq!(reg.tags().count(), 8);
    assert_eq!(reg.kind_of("marquee"), None);
}

#[test]
fn tags_are_case_insensitive() {
    let reg = Registry::builtin().unwrap();
    assert_eq!(
        reg.kind_of(" Framed-Window "),
        Some(ComponentKind::FramedRaster)
    );
}

#[test]
fn duplicate_and_blank_tags_are_rejected() {
    let mut reg = Registry::builtin().unwrap();
    let err = reg
        .register("wall-surface", ComponentKind::ScaledRaster, make_column)
        .unwrap_err();
    assert!(err.to_string().contains("already registered"));
    assert!(
        reg.register("  ", ComponentKind::ScaledRaster, make_column)
            .is_err()
    );
}

#[test]
fn instantiate_builds_the_registered_kind_with_defaults() {
    let reg = Registry::builtin().unwrap();
    let opts = RenderOpts::default();
    for kind in ComponentKind::ALL {
        let c = reg.instantiate(kind.tag(), &Attributes::new(), &opts).unwrap();
        assert_eq!(c.kind(), kind);
        assert_eq!(c.dimensions(), kind.default_size());
    }
}

#[test]
fn instantiate_unknown_tag_fails() {
    let reg = Registry::builtin().unwrap();
    let err = reg
        .instantiate("image-door", &Attributes::new(), &RenderOpts::default())
        .unwrap_err();
    assert!(err.to_string().contains("unknown component tag"));
}

#[test]
fn strict_mode_rejects_bad_dimensions() {
    let reg = Registry::builtin().unwrap();
    let attrs = Attributes::new().with("width", "wide");

    let lenient = reg
        .instantiate("scaled-column", &attrs, &RenderOpts::default())
        .unwrap();
    assert_eq!(lenient.dimensions(), Dimensions::new(100, 300));

    let strict = RenderOpts {
        strict_attrs: true,
        ..RenderOpts::default()
    };
    assert!(reg.instantiate("scaled-column", &attrs, &strict).is_err());
}

#[test]
fn custom_registry_can_alias_a_kind() {
    let mut reg = Registry::new();
    reg.register("pillar", ComponentKind::ScaledRaster, make_column)
        .unwrap();
    let c = reg
        .instantiate("pillar", &Attributes::new(), &RenderOpts::default())
        .unwrap();
    assert_eq!(c.kind(), ComponentKind::ScaledRaster);
    assert!(format!("{reg:?}").contains("pillar"));
}
