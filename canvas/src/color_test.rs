use super::*;

#[test]
fn parse_supports_short_and_long_forms() {
    assert_eq!("#ABC".parse::<Rgb>(), Ok(Rgb::new(170, 187, 204)));
    assert_eq!("  #a1B2c3 ".parse::<Rgb>(), Ok(Rgb::new(161, 178, 195)));
}

#[test]
fn parse_rejects_invalid_inputs() {
    for raw in ["AABBCC", "#12", "#abcd", "#12GG34", "#ééé", ""] {
        assert!(raw.parse::<Rgb>().is_err(), "{raw:?} should not parse");
    }
}

#[test]
fn to_hex_is_canonical_lowercase() {
    assert_eq!(Rgb::new(0x25, 0x63, 0xeb).to_hex(), "#2563eb");
    assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
}

#[test]
fn to_rgba_is_opaque() {
    assert_eq!(Rgb::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
}

#[test]
fn serde_uses_hex_strings() {
    let json = serde_json::to_string(&Rgb::new(0xdc, 0x26, 0x26)).unwrap();
    assert_eq!(json, "\"#dc2626\"");
    let parsed: Rgb = serde_json::from_str("\"#FFF\"").unwrap();
    assert_eq!(parsed, Rgb::new(255, 255, 255));
    assert!(serde_json::from_str::<Rgb>("\"white\"").is_err());
}
