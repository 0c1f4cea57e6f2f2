use std::fs;
use std::path::PathBuf;

#[test]
fn compile_cmd_writes_output_file() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let dir = PathBuf::from(manifest_dir)
        .join("../target/stashmark-cli-tests")
        .join(std::process::id().to_string());
    fs::create_dir_all(&dir).expect("create test dir");

    let input = dir.join("logo.smk");
    fs::write(&input, "%img{bind: {src: \"logoUri\"}, alt: \"Logo\"}\n").expect("write input");

    let out = dir.join("logo.hbs");
    stashmark_cli::compile_cmd(&input, Some(out.as_path()), stashmark_cli::Format::Xhtml, false)
        .expect("compile");

    let content = fs::read_to_string(&out).expect("read output");
    assert_eq!(content, "<img {{bind-attr src=\"logoUri\"}} alt='Logo' />\n");
}

#[test]
fn compile_cmd_fails_on_missing_input() {
    let missing = PathBuf::from("no/such/file.smk");
    let err = stashmark_cli::compile_cmd(&missing, None, stashmark_cli::Format::Xhtml, false)
        .unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}
