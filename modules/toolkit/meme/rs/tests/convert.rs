use std::fs;
use std::path::{Path, PathBuf};

use depthwin_meme_rs::Converter;
use eyre::Result;

fn resource(name: &str) -> PathBuf {
    Path::new(env!("DEPTHWIN_RESOURCES")).join("pwm").join(name)
}

#[test]
fn test_convert_foxa2() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let converter = Converter::new().with_outdir(Some(dir.path().to_path_buf()));

    let converted = converter.convert(&resource("Foxa2_pwm.txt"))?;
    assert_eq!(converted.motif(), "Foxa2");
    assert_eq!(*converted.width(), 8);
    assert_eq!(converted.output(), &dir.path().join("Foxa2_MEME.txt"));

    let text = fs::read_to_string(converted.output())?;
    assert!(text.starts_with("MEME version 4\n\nALPHABET= ACGT\n\nstrands: + -\n"));
    assert!(text.contains("\nMOTIF Foxa2\nletter-probability matrix: alength= 4 w= 8\n"));

    let rows: Vec<&str> = text
        .lines()
        .skip_while(|x| !x.starts_with("letter-probability matrix"))
        .skip(1)
        .take_while(|x| !x.is_empty())
        .collect();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], "0.240000  0.180000  0.330000  0.250000");
    assert_eq!(rows[7], "0.910000  0.030000  0.030000  0.030000");
    Ok(())
}

#[test]
fn test_batch_with_invalid_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let valid = dir.path().join("Foxa2_pwm.txt");
    fs::copy(resource("Foxa2_pwm.txt"), &valid)?;

    let invalid = dir.path().join("Broken_pwm.txt");
    fs::write(&invalid, "Broken\nA:\t0.5\t0.5\nC:\t0.5\nG:\t0.0\t0.0\nT:\t0.0\t0.0\n")?;

    let results = Converter::new().run(&[invalid.clone(), valid.clone()])?;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0, invalid);
    assert!(results[0].1.is_err());
    assert!(results[1].1.is_ok());

    assert!(dir.path().join("Foxa2_MEME.txt").exists());
    assert!(!dir.path().join("Broken_MEME.txt").exists());
    Ok(())
}

#[test]
fn test_motif_name_override() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let converter = Converter::new()
        .with_name(Some("FOXA2_HUMAN".to_string()))
        .with_outdir(Some(dir.path().to_path_buf()));

    let results = converter.run(&[resource("Foxa2_pwm.txt")])?;
    let converted = results[0].1.as_ref().map_err(|err| eyre::eyre!("{err:?}"))?;
    assert_eq!(converted.output(), &dir.path().join("FOXA2_HUMAN_MEME.txt"));

    let text = fs::read_to_string(converted.output())?;
    assert!(text.contains("\nMOTIF FOXA2_HUMAN\n"));
    Ok(())
}
