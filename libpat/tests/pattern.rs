use libpat::{rows_per_inch, Error, Pattern, COLUMNS_PER_INCH, MAX_CHANNELS};

#[test]
fn rejects_more_than_256_channels() {
    let result = Pattern::builder()
        .width(1)
        .height(1)
        .drop(1)
        .channels(vec![(0, 0, 0); MAX_CHANNELS + 1])
        .bitmap(vec![0])
        .build();
    assert!(matches!(result, Err(Error::TooManyChannels { count: 257 })));
}

#[test]
fn accepts_exactly_256_channels() -> anyhow::Result<()> {
    let pattern = Pattern::builder()
        .width(1)
        .height(1)
        .drop(1)
        .channels(vec![(0, 0, 0); MAX_CHANNELS])
        .bitmap(vec![0])
        .build()?;
    assert_eq!(pattern.channels().len(), 256);
    Ok(())
}

#[test]
fn rejects_bitmap_not_matching_dimensions() {
    let result = Pattern::builder()
        .width(2)
        .height(2)
        .drop(1)
        .channels(vec![(0, 0, 0)])
        .bitmap(vec![0, 0, 0])
        .build();
    assert!(matches!(
        result,
        Err(Error::MismatchedBitmap {
            width_height: (2, 2),
            bitmap_length: 3,
        })
    ));
}

#[test]
fn old_era_quality_codes_encode_their_final_digit() {
    for qual in 71..=79 {
        assert_eq!(rows_per_inch(qual), qual % 10);
    }
}

#[test]
fn new_era_quality_codes_encode_their_final_two_digits() {
    for qual in 501..=1099 {
        if (3..=24).contains(&(qual % 100)) {
            assert_eq!(rows_per_inch(qual), qual % 100);
        } else {
            assert_eq!(rows_per_inch(qual), 0);
        }
    }
}

#[test]
fn quality_codes_outside_both_eras_are_unknown() {
    for qual in [0, 70, 80, 500, 502, 525, 601, 1100, u16::MAX] {
        assert_eq!(rows_per_inch(qual), 0);
    }
}

#[test]
fn physical_size_follows_quality_code() -> anyhow::Result<()> {
    let pattern = Pattern::builder()
        .width(70)
        .height(324)
        .drop(162)
        .channels(vec![(0, 0, 0)])
        .bitmap(vec![0; 70 * 324])
        .qual(75)
        .build()?;

    assert_eq!(pattern.columns_per_inch(), COLUMNS_PER_INCH);
    assert_eq!(pattern.rows_per_inch(), 5);

    let (w_in, h_in) = pattern.size_inches()?;
    assert!((w_in - 10.0).abs() < 1e-9);
    assert!((h_in - 64.8).abs() < 1e-9);

    let (w_m, h_m) = pattern.size_metres()?;
    assert!((w_m - 0.254).abs() < 1e-9);
    assert!((h_m - 1.64592).abs() < 1e-9);

    assert!((pattern.columns_per_metre() - 275.590_551_181).abs() < 1e-6);
    assert!((pattern.rows_per_metre() - 196.850_393_700).abs() < 1e-6);
    Ok(())
}

#[test]
fn physical_size_fails_without_a_known_resolution() -> anyhow::Result<()> {
    let pattern = Pattern::builder()
        .width(7)
        .height(7)
        .drop(7)
        .channels(vec![(0, 0, 0)])
        .bitmap(vec![0; 49])
        .qual(80)
        .build()?;

    assert_eq!(pattern.rows_per_inch(), 0);
    assert!(matches!(
        pattern.size_inches(),
        Err(Error::UnknownResolution { qual: 80 })
    ));
    assert!(matches!(
        pattern.size_metres(),
        Err(Error::UnknownResolution { qual: 80 })
    ));
    Ok(())
}
