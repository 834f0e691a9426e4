//! Library integration tests.

use legible::LegibleError;

#[test]
fn error_types_are_public() {
    let err = LegibleError::UnknownScale { id: "test".into() };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> legible::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use legible::cli::{Cli, Commands};

    // Actually test parsing with parse_from
    let cli = Cli::parse_from(["legible", "report", "--json"]);
    if let Commands::Report(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Report command");
    }
}

#[test]
fn evaluation_pipeline_is_public() {
    use legible::eval::evaluate;
    use legible::scales::ScaleRegistry;

    let registry = ScaleRegistry::shared();
    let scale = registry.get("sentence-count").unwrap();
    let result = evaluate(scale, "One. Two. Three.");
    assert_eq!(result.summary(), "Sentence Count : 3");
}
