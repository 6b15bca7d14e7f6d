use color_eyre::Result;
use n::cli::input::{parse_cli_args, CliArgs};
use n::domain::status::Status;
use n::utils::fs::{create_directory, create_file};
use n::worker::run_n;
use tempfile::tempdir;

fn cli_args_for(root: &std::path::Path, args: &[&str]) -> CliArgs {
    let root = root.display().to_string();
    let mut full_args = vec!["n", "--root", root.as_str()];
    full_args.extend_from_slice(args);
    parse_cli_args(full_args).expect("The arguments should be recognized")
}

#[test]
fn test_unrecognized_arguments_fail_without_doing_anything() -> Result<()> {
    let temp = tempdir()?;
    let build_dir = temp.path().join("build");
    create_directory(&build_dir)?;
    let root = temp.path().display().to_string();

    for args in [
        vec!["n", "--root", root.as_str()],
        vec!["n", "--root", root.as_str(), "build"],
        vec!["n", "--root", root.as_str(), "run", "debug"],
        vec!["n", "--root", root.as_str(), "clean", "now"],
        vec!["n", "--root", root.as_str(), "run", "release", "foo"],
    ] {
        assert_eq!(parse_cli_args(args).err(), Some(Status::FAILURE));
    }

    assert!(build_dir.exists());
    Ok(temp.close()?)
}

#[test]
fn test_clean_removes_the_build_directory() -> Result<()> {
    let temp = tempdir()?;
    let build_dir = temp.path().join("build");
    create_directory(&build_dir.join("meson-private"))?;
    create_file(&build_dir, "build.ninja", b"ninja_required_version = 1.8.2")?;

    assert_eq!(run_n(&cli_args_for(temp.path(), &["clean"]))?, Status::SUCCESS);
    assert!(!build_dir.exists());

    // Like `rm -rf`, cleaning twice is fine
    assert_eq!(run_n(&cli_args_for(temp.path(), &["clean"]))?, Status::SUCCESS);
    Ok(temp.close()?)
}

#[test]
fn test_clean_removes_a_file_left_in_place_of_the_build_directory() -> Result<()> {
    let temp = tempdir()?;
    create_file(temp.path(), "build", b"stale")?;

    assert_eq!(run_n(&cli_args_for(temp.path(), &["clean"]))?, Status::SUCCESS);
    assert!(!temp.path().join("build").exists());
    Ok(temp.close()?)
}

#[test]
fn test_clean_honours_the_configuration_file() -> Result<()> {
    let temp = tempdir()?;
    create_directory(&temp.path().join("build"))?;
    create_directory(&temp.path().join("out"))?;
    create_file(temp.path(), "n.toml", b"[build]\noutput_dir = 'out'\n")?;

    assert_eq!(run_n(&cli_args_for(temp.path(), &["clean"]))?, Status::SUCCESS);
    assert!(!temp.path().join("out").exists());
    assert!(temp.path().join("build").exists());
    Ok(temp.close()?)
}

#[test]
fn test_configuration_file_with_every_setting_is_accepted() -> Result<()> {
    let temp = tempdir()?;
    create_directory(&temp.path().join("out"))?;
    create_file(
        temp.path(),
        "n.toml",
        b"[build]\noutput_dir = 'out'\nexecutable = 'clox'\n\n[meson]\ndriver = 'meson'\nwarnlevel = 4\n",
    )?;

    assert_eq!(run_n(&cli_args_for(temp.path(), &["clean"]))?, Status::SUCCESS);
    assert!(!temp.path().join("out").exists());
    Ok(temp.close()?)
}

#[test]
fn test_malformed_configuration_file_is_an_error() -> Result<()> {
    let temp = tempdir()?;
    create_file(temp.path(), "n.toml", b"[build]\nsanitizers = 'all'\n")?;

    assert!(run_n(&cli_args_for(temp.path(), &["clean"])).is_err());
    Ok(temp.close()?)
}

#[test]
fn test_missing_project_root_is_an_error() -> Result<()> {
    let temp = tempdir()?;
    let missing = temp.path().join("missing");

    assert!(run_n(&cli_args_for(&missing, &["clean"])).is_err());
    Ok(temp.close()?)
}

#[test]
fn test_init_with_an_unavailable_build_system_is_an_error() -> Result<()> {
    let temp = tempdir()?;
    create_file(
        temp.path(),
        "n.toml",
        b"[meson]\ndriver = 'n-missing-meson-driver'\n",
    )?;

    assert!(run_n(&cli_args_for(temp.path(), &["init"])).is_err());
    Ok(temp.close()?)
}

#[cfg(unix)]
#[test]
fn test_run_fails_when_setting_up_the_build_directory_fails() -> Result<()> {
    let temp = tempdir()?;
    create_file(temp.path(), "n.toml", b"[meson]\ndriver = 'false'\n")?;

    assert_eq!(
        run_n(&cli_args_for(temp.path(), &["run", "--", "script.lox"]))?,
        Status::FAILURE
    );
    Ok(temp.close()?)
}

#[cfg(unix)]
#[test]
fn test_run_without_buildtype_on_the_configuration_dump_is_an_error() -> Result<()> {
    let temp = tempdir()?;
    // `true` succeeds at every step, but prints an empty configuration dump
    create_file(temp.path(), "n.toml", b"[meson]\ndriver = 'true'\n")?;

    let err = run_n(&cli_args_for(temp.path(), &["run"])).unwrap_err();
    assert!(err.chain().any(|cause| cause
        .to_string()
        .contains("Could not find the 'buildtype' option")));
    Ok(temp.close()?)
}
