use libpat::{Error, Pattern};

fn sample_pattern() -> anyhow::Result<Pattern> {
    Ok(Pattern::builder()
        .width(2)
        .height(3)
        .drop(5)
        .channels(vec![(1, 2, 3), (4, 5, 6)])
        .bitmap(vec![0, 1, 0, 1, 0, 1])
        .qual(75)
        .build()?)
}

#[test]
fn encode_writes_fields_at_fixed_offsets() -> anyhow::Result<()> {
    let buf = sample_pattern()?.to_bytes();
    assert_eq!(buf.len(), 1536 + 6);

    // width/height/quality big-endian, drop little-endian
    assert_eq!(&buf[0..2], &[0x00, 0x02]);
    assert_eq!(&buf[2..4], &[0x00, 0x03]);
    assert_eq!(&buf[18..20], &[0x00, 75]);
    assert_eq!(&buf[30..32], &[5, 0x00]);

    // green and blue planes are written one byte above their read bases
    assert_eq!(&buf[513..515], &[2, 5]);
    assert_eq!(&buf[768..770], &[1, 4]);
    assert_eq!(&buf[1025..1027], &[3, 6]);

    // unused palette slots stay zero
    assert_eq!(buf[512], 0);
    assert_eq!(buf[770], 0);
    assert_eq!(buf[1024], 0);

    assert_eq!(&buf[1536..], &[0, 1, 0, 1, 0, 1]);
    Ok(())
}

#[test]
fn encode_leaves_quality_absent_when_unknown() -> anyhow::Result<()> {
    let pattern = Pattern::builder()
        .width(1)
        .height(1)
        .drop(1)
        .channels(vec![(10, 20, 30)])
        .bitmap(vec![0])
        .build()?;
    assert_eq!(pattern.qual(), 0);

    let buf = pattern.to_bytes();
    assert_eq!(&buf[18..20], &[0, 0]);
    Ok(())
}

#[test]
fn decode_reads_all_256_palette_slots() -> anyhow::Result<()> {
    let buf = sample_pattern()?.to_bytes();
    let decoded = Pattern::from_bytes(&buf)?;
    assert_eq!(decoded.channels().len(), 256);
    Ok(())
}

#[test]
fn roundtrip_preserves_pattern_fields() -> anyhow::Result<()> {
    let pattern = sample_pattern()?;
    let decoded = Pattern::from_bytes(&pattern.to_bytes())?;

    assert_eq!(decoded.width(), pattern.width());
    assert_eq!(decoded.height(), pattern.height());
    assert_eq!(decoded.drop(), pattern.drop());
    assert_eq!(decoded.qual(), pattern.qual());
    assert_eq!(
        decoded.bitmap().palette_indices(),
        pattern.bitmap().palette_indices()
    );

    // the red plane shares its read and write base, so red round-trips
    // index-stable
    for (i, channel) in pattern.channels().iter().enumerate() {
        assert_eq!(decoded.channels()[i].0, channel.0);
    }
    Ok(())
}

#[test]
fn roundtrip_staggers_green_and_blue_planes_by_one_slot() -> anyhow::Result<()> {
    // the reference tooling writes green at 513 and blue at 1025 but reads
    // them back at 512 and 1024, shifting both planes up one slot on a
    // round trip; slot 0 picks up the plane's leading zero byte
    let pattern = sample_pattern()?;
    let decoded = Pattern::from_bytes(&pattern.to_bytes())?;

    assert_eq!(decoded.channels()[0].1, 0);
    assert_eq!(decoded.channels()[0].2, 0);
    for (i, channel) in pattern.channels().iter().enumerate() {
        assert_eq!(decoded.channels()[i + 1].1, channel.1);
        assert_eq!(decoded.channels()[i + 1].2, channel.2);
    }
    Ok(())
}

#[test]
fn absent_quality_roundtrips_as_absent() -> anyhow::Result<()> {
    let pattern = Pattern::builder()
        .width(1)
        .height(1)
        .drop(1)
        .channels(vec![(10, 20, 30)])
        .bitmap(vec![0])
        .build()?;
    let decoded = Pattern::from_bytes(&pattern.to_bytes())?;
    assert_eq!(decoded.qual(), 0);
    assert_eq!(decoded.rows_per_inch(), 0);
    Ok(())
}

#[test]
fn decode_rejects_buffer_shorter_than_header() {
    let buf = vec![0u8; 100];
    assert!(matches!(
        Pattern::from_bytes(&buf),
        Err(Error::TruncatedFormat {
            expected: 1536,
            actual: 100,
        })
    ));
}

#[test]
fn decode_rejects_buffer_shorter_than_declared_raster() -> anyhow::Result<()> {
    let mut buf = sample_pattern()?.to_bytes();
    buf.pop();
    assert!(matches!(
        Pattern::from_bytes(&buf),
        Err(Error::TruncatedFormat {
            expected: 1542,
            actual: 1541,
        })
    ));
    Ok(())
}

#[test]
fn file_roundtrip() -> anyhow::Result<()> {
    let pattern = sample_pattern()?;
    let tmp_pat = mktemp::Temp::new_file()?;
    pattern.clone().into_file(&tmp_pat)?;

    let decoded = Pattern::from_file(&tmp_pat)?;
    assert_eq!(decoded.width(), pattern.width());
    assert_eq!(decoded.height(), pattern.height());
    assert_eq!(decoded.drop(), pattern.drop());
    assert_eq!(decoded.qual(), pattern.qual());
    assert_eq!(
        decoded.bitmap().palette_indices(),
        pattern.bitmap().palette_indices()
    );
    Ok(())
}
