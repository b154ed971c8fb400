use ruuid_client::{GeneratorConfig, UuidGenerator, Variant};

use crate::harness::{entropy::ScriptedEntropy, logger::init_logger, uuid_format::check_v4_format};

#[test]
fn every_id_has_v4_layout() -> anyhow::Result<()> {
    init_logger();
    let mut generator = UuidGenerator::new(GeneratorConfig::with_seed(0x5eed));
    for _ in 0..512 {
        let text = generator.create()?;
        check_v4_format(&text)?;
    }
    assert_eq!(generator.generated(), 512);
    Ok(())
}

#[test]
fn successive_ids_differ() -> anyhow::Result<()> {
    let mut generator = UuidGenerator::new(GeneratorConfig::with_seed(1));
    let first = generator.create()?;
    let second = generator.create()?;
    assert_ne!(first, second);
    // the first value is still intact after the second call
    check_v4_format(&first)?;
    Ok(())
}

#[test]
fn stepped_bytes_render_golden_output() -> anyhow::Result<()> {
    let mut generator =
        UuidGenerator::with_entropy(ScriptedEntropy::stepped(), GeneratorConfig::default());
    let text = generator.create()?;
    // byte 6: 0x66 -> 0x46, byte 8: 0x88 already carries the 10 prefix
    assert_eq!(text.as_str(), "00112233-4455-4677-8899-aabbccddeeff");
    assert_eq!(text.to_uuid().as_bytes()[..6], [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    Ok(())
}

#[test]
fn variant_bits_overwrite_high_byte() -> anyhow::Result<()> {
    let mut bytes = vec![0x00; 16];
    bytes[6] = 0xff;
    bytes[8] = 0x7f;
    let mut generator =
        UuidGenerator::with_entropy(ScriptedEntropy::new(bytes), GeneratorConfig::default());
    let text = generator.create()?;
    assert_eq!(text.as_str(), "00000000-0000-4f00-bf00-000000000000");
    Ok(())
}

#[test]
fn independent_parser_agrees() -> anyhow::Result<()> {
    let mut generator = UuidGenerator::new(GeneratorConfig::with_seed(77));
    for _ in 0..64 {
        let ours = generator.create_uuid()?;
        let theirs = uuid::Uuid::parse_str(&ours.to_text())?;
        assert_eq!(theirs.get_version_num(), 4);
        assert_eq!(theirs.get_variant(), uuid::Variant::RFC4122);
        assert_eq!(theirs.as_bytes(), ours.as_bytes());
        assert_eq!(ours.variant(), Variant::Rfc4122);
    }
    Ok(())
}

#[test]
fn ids_from_other_generators_parse() -> anyhow::Result<()> {
    let foreign = uuid::Uuid::new_v4();
    let parsed: ruuid_client::Uuid = foreign.to_string().parse()?;
    assert_eq!(parsed.as_bytes(), foreign.as_bytes());
    assert_eq!(parsed.version(), Some(4));
    Ok(())
}
