use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use depthwin_io_rs::compression::decode;
use depthwin_slidwin_rs::{Config, Engine, Error, LengthSource};
use eyre::Result;

fn resource(name: &str) -> PathBuf {
    Path::new(env!("DEPTHWIN_RESOURCES")).join("depth").join(name)
}

fn read(path: &Path) -> Result<String> {
    let mut text = String::new();
    decode::infer_from_path(path)?.read_to_string(&mut text)?;
    Ok(text)
}

const EXPECTED: &str =
    "ctrl_1\tctrl_2\ttreat_1\n4.50000\t1.00000\t3.00000\n8.00000\t1.00000\t2.85714\n";

#[test]
fn test_batch_with_corrupted_file() -> Result<()> {
    let _ = pretty_env_logger::try_init();

    let dir = tempfile::tempdir()?;
    let inputs = ["first.txt.gz", "corrupted.txt.gz", "second.txt.gz"].map(|x| dir.path().join(x));
    fs::copy(resource("example.txt.gz"), &inputs[0])?;
    fs::copy(resource("corrupted.txt.gz"), &inputs[1])?;
    fs::copy(resource("example.txt.gz"), &inputs[2])?;

    let mut engine = Engine::<f64>::builder()
        .set_config(Config::new(5, 10)?)
        .set_workers(3)
        .add_inputs(inputs.iter())
        .build::<f64>()?;
    let outcomes = engine.run();

    assert_eq!(outcomes.len(), 3);
    for (outcome, input) in outcomes.iter().zip(&inputs) {
        assert_eq!(outcome.input(), input);
    }

    for ind in [0, 2] {
        let summary = outcomes[ind].result().as_ref().map_err(|err| eyre::eyre!("{err:?}"))?;
        assert_eq!(read(summary.output())?, EXPECTED);
    }

    let err = outcomes[1].result().as_ref().err();
    assert_eq!(
        err.and_then(|x| x.downcast_ref::<Error>()),
        Some(&Error::Input {
            path: inputs[1].clone()
        })
    );
    assert!(!dir.path().join("Win_corrupted.txt.gz").exists());
    Ok(())
}

#[test]
fn test_fixed_length_and_chunks() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = Config::new(5, 10)?
        .with_length(LengthSource::Fixed(11))?
        .with_chunks(true)
        .with_outdir(Some(dir.path().to_path_buf()));

    let mut engine = Engine::<f64>::builder()
        .set_config(config)
        .add_input(resource("example.txt"))
        .build::<f64>()?;
    let mut outcomes = engine.run();

    let summary = outcomes.pop().map(|x| x.dissolve().1).transpose()?;
    let summary = summary.ok_or_else(|| eyre::eyre!("No outcome"))?;
    assert_eq!(*summary.length(), 11);
    assert_eq!(*summary.rows(), 12);

    // A single position in the last chunk: (10.5 * 1 + 7 * 5) / (5 + 1)
    assert_eq!(
        read(summary.output())?,
        "ctrl_1\tctrl_2\ttreat_1\n4.50000\t1.00000\t3.00000\n7.58333\t1.00000\t3.33333\n"
    );
    assert_eq!(
        summary.chunks_output().as_deref(),
        Some(dir.path().join("Chunks_example.txt").as_path())
    );
    assert_eq!(
        read(&dir.path().join("Chunks_example.txt"))?,
        "ctrl_1\tctrl_2\ttreat_1\n\
         2.00000\t1.00000\t2.00000\n\
         7.00000\t1.00000\t4.00000\n\
         10.50000\t1.00000\t0.00000\n"
    );
    Ok(())
}

#[test]
fn test_insufficient_data() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = Config::new(5, 20)?
        .with_chunks(true)
        .with_outdir(Some(dir.path().to_path_buf()));

    let mut engine = Engine::<f64>::builder()
        .set_config(config)
        .add_input(resource("example.txt.gz"))
        .build::<f64>()?;
    let outcomes = engine.run();

    let err = outcomes[0].result().as_ref().err();
    assert_eq!(
        err.and_then(|x| x.downcast_ref::<Error>()),
        Some(&Error::InsufficientData {
            chunks: 3,
            required: 4
        })
    );
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_same_names_in_one_outdir() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let outdir = dir.path().join("out");
    let mut inputs = Vec::new();
    for (sub, depth) in [("a", 1), ("b", 9)] {
        fs::create_dir(dir.path().join(sub))?;
        let path = dir.path().join(sub).join("x.txt");
        let rows = (0..20).map(|_| format!("{depth}\n")).collect::<String>();
        fs::write(&path, format!("depth\n{rows}"))?;
        inputs.push(path);
    }

    let err = Engine::<f64>::builder()
        .set_config(Config::new(5, 10)?.with_outdir(Some(outdir.clone())))
        .set_workers(2)
        .add_inputs(inputs.iter())
        .build::<f64>()
        .err();
    assert!(matches!(
        err.as_ref().and_then(|x| x.downcast_ref::<Error>()),
        Some(Error::Configuration { .. })
    ));
    assert!(!outdir.join("Win_x.txt").exists());

    // Without the shared directory each output stays next to its input
    let mut engine = Engine::<f64>::builder()
        .set_config(Config::new(5, 10)?)
        .set_workers(2)
        .add_inputs(inputs.iter())
        .build::<f64>()?;
    for (outcome, depth) in engine.run().iter().zip(["1.00000", "9.00000"]) {
        let summary = outcome.result().as_ref().map_err(|err| eyre::eyre!("{err:?}"))?;
        let text = read(summary.output())?;
        assert!(text.lines().skip(1).all(|x| x == depth));
    }
    Ok(())
}
