use anyhow::Result;
use filterdsp::Band;
use filterdsp::Error;
use filterdsp::Tolerance;
use filterdsp::iirdes;
use std::f64::consts::FRAC_1_SQRT_2;

fn bands(sample_rate: f64) -> Vec<Band> {
    vec![
        Band::lowpass(sample_rate * 0.05),
        Band::lowpass(sample_rate * 0.45),
        Band::highpass(sample_rate * 0.05),
        Band::highpass(sample_rate * 0.25),
        Band::bandpass(sample_rate * 0.05, sample_rate * 0.2),
        Band::bandpass(sample_rate * 0.1, sample_rate * 0.4),
        Band::bandstop(sample_rate * 0.05, sample_rate * 0.2),
        Band::bandstop(sample_rate * 0.1, sample_rate * 0.4),
    ]
}

fn expected_len(order: usize, band: &Band) -> usize {
    order * band.filter_type().num_cutoffs() + 1
}

#[test]
fn normalized_denominator_and_lengths() -> Result<()> {
    for sample_rate in [1000.0, 8000.0, 44100.0] {
        for band in bands(sample_rate) {
            for order in 1..=8 {
                let tf = iirdes::butter(order, &band, sample_rate)?;
                assert_eq!(tf.a[0], 1.0);
                assert_eq!(tf.a.len(), expected_len(order, &band));
                assert_eq!(tf.b.len(), expected_len(order, &band));
            }
        }
    }
    Ok(())
}

#[test]
fn poles_inside_unit_circle() -> Result<()> {
    for band in bands(8000.0) {
        for order in 1..=8 {
            let zpk = iirdes::butter_zpk(order, &band, 8000.0)?;
            assert_eq!(zpk.poles.len(), expected_len(order, &band) - 1);
            for p in zpk.poles.iter() {
                assert!(p.norm() < 1.0, "{band:?} order {order}: pole {p}");
            }
        }
    }
    Ok(())
}

#[test]
fn zpk_expands_to_coefficients() -> Result<()> {
    let band = Band::bandstop(300.0, 3400.0);
    let zpk = iirdes::butter_zpk(3, &band, 8000.0)?;
    let tf = iirdes::butter(3, &band, 8000.0)?;
    assert_eq!(zpk.to_tf(&Tolerance::default())?, tf);
    Ok(())
}

#[test]
fn half_power_at_cutoff() -> Result<()> {
    let sample_rate = 8000.0;
    for order in [1, 2, 5] {
        let tf = iirdes::butter(order, &Band::lowpass(1000.0), sample_rate)?;
        assert!((tf.response(1000.0, sample_rate).norm() - FRAC_1_SQRT_2).abs() < 1e-6);

        let tf = iirdes::butter(order, &Band::highpass(1000.0), sample_rate)?;
        assert!((tf.response(1000.0, sample_rate).norm() - FRAC_1_SQRT_2).abs() < 1e-6);

        for band in [
            Band::bandpass(300.0, 3400.0),
            Band::bandstop(300.0, 3400.0),
        ] {
            let tf = iirdes::butter(order, &band, sample_rate)?;
            for f in [300.0, 3400.0] {
                assert!((tf.response(f, sample_rate).norm() - FRAC_1_SQRT_2).abs() < 1e-6);
            }
        }
    }
    Ok(())
}

#[test]
fn bandpass_example() -> Result<()> {
    let band = Band::bandpass(300.0, 3400.0);
    let tf = iirdes::butter(2, &band, 8000.0)?;
    assert_eq!(tf.b.len(), 5);
    assert_eq!(tf.a.len(), 5);
    assert_eq!(tf.a[0], 1.0);
    let zpk = iirdes::butter_zpk(2, &band, 8000.0)?;
    assert!(zpk.poles.iter().all(|p| p.norm() < 1.0));
    Ok(())
}

#[test]
fn stopband_rejection() -> Result<()> {
    let tf = iirdes::butter(4, &Band::bandstop(900.0, 1100.0), 8000.0)?;
    assert!(tf.response(1000.0, 8000.0).norm() < 1e-3);
    assert!((tf.response(3000.0, 8000.0).norm() - 1.0).abs() < 1e-3);
    Ok(())
}

#[test]
fn designs_are_deterministic() -> Result<()> {
    let band = Band::bandstop(50.0, 60.0);
    assert_eq!(
        iirdes::butter(3, &band, 1000.0)?,
        iirdes::butter(3, &band, 1000.0)?
    );
    Ok(())
}

#[test]
fn invalid_requests() {
    assert!(matches!(
        iirdes::butter(2, &Band::lowpass(4000.0), 8000.0),
        Err(Error::InvalidFrequencySpec(_))
    ));
    assert!(matches!(
        iirdes::butter(2, &Band::bandpass(3400.0, 300.0), 8000.0),
        Err(Error::InvalidFrequencySpec(_))
    ));
    assert!(matches!(
        iirdes::butter(0, &Band::lowpass(1000.0), 8000.0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn unrealizable_order_is_rejected() {
    assert!(matches!(
        iirdes::butter(12, &Band::bandpass(10.0, 20.0), 48000.0),
        Err(Error::NumericalInstability(_))
    ));
}
