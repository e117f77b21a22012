//! The load → render → write run.
//!
//! Everything is rendered before anything is written, so a malformed template
//! or a missing placeholder never creates the output file.

use crate::cli::Cli;
use crate::error::Result;
use crate::params::ParameterSet;
use crate::template::{Template, render_pairs};
use crate::writer::write_pairs;
use std::path::{Path, PathBuf};

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub template: PathBuf,
    pub output: PathBuf,
    /// Record file; `None` uses the built-in records.
    pub params: Option<PathBuf>,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            template: cli.template.clone(),
            output: cli.output.clone(),
            params: cli.params.clone(),
        }
    }
}

/// Load the parameter records named by `path`, or the defaults.
pub fn load_records(path: Option<&Path>) -> Result<ParameterSet> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading parameter records");
            ParameterSet::load(path)
        }
        None => {
            tracing::debug!("using built-in parameter records");
            Ok(ParameterSet::default())
        }
    }
}

/// Execute a run and return the number of data rows written.
pub fn run(options: &RunOptions) -> Result<usize> {
    tracing::debug!(path = %options.template.display(), "loading template");
    let template = Template::load(&options.template)?;
    tracing::debug!(placeholders = ?template.placeholders(), "template loaded");

    let records = load_records(options.params.as_deref())?;
    if records.is_empty() {
        tracing::warn!("no parameter records; output will contain only the header");
    }
    tracing::info!(records = records.len(), "rendering");

    let pairs = render_pairs(&template, &records)?;

    write_pairs(&pairs, &options.output)?;
    tracing::info!(rows = pairs.len(), output = %options.output.display(), "done");

    Ok(pairs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PairgenError, Section};
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        fn write(&self, name: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }
    }

    #[test]
    fn test_greeting_scenario() {
        let fx = Fixture::new();
        let options = RunOptions {
            template: fx.write("template.txt", "Hello {name}\n---\nprint('{name}')\n"),
            output: fx.path("out.csv"),
            params: Some(fx.write("params.json", r#"[{"name":"Alice"},{"name":"Bob"}]"#)),
        };

        let rows = run(&options).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            fs::read_to_string(&options.output).unwrap(),
            "user_query,code\nHello Alice,print('Alice')\nHello Bob,print('Bob')\n"
        );
    }

    #[test]
    fn test_default_records() {
        let fx = Fixture::new();
        let template = r#"
# User query:
"Generate a {model} completion with temperature {temperature}"

---
# Code to run:
import openai
openai.ChatCompletion.create(
    model="{model}",
    messages=[{"role":"user","content":"Hello!"}],
    temperature={temperature}
)
"#;
        let options = RunOptions {
            template: fx.write("template.txt", template),
            output: fx.path("out.csv"),
            params: None,
        };

        assert_eq!(run(&options).unwrap(), 3);

        let mut reader = csv::Reader::from_path(&options.output).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            &rows[0][0],
            "# User query:\n\"Generate a gpt-3.5 completion with temperature 0.7\""
        );
        assert!(rows[1][1].contains("model=\"gpt-4\","));
        assert!(rows[1][1].contains("temperature=0.1\n)"));
        assert!(rows[2][1].contains(r#"messages=[{"role":"user","content":"Hello!"}]"#));
    }

    #[test]
    fn test_missing_separator_creates_no_output() {
        let fx = Fixture::new();
        let options = RunOptions {
            template: fx.write("template.txt", "Hello {name}\nprint('{name}')\n"),
            output: fx.path("out.csv"),
            params: None,
        };

        let err = run(&options).unwrap_err();

        assert!(matches!(err, PairgenError::MalformedTemplate(_)));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_missing_placeholder_creates_no_output() {
        let fx = Fixture::new();
        let options = RunOptions {
            template: fx.write("template.txt", "Hello {name}\n---\nprint('{name}', {age})\n"),
            output: fx.path("out.csv"),
            params: Some(fx.write(
                "params.yaml",
                "- name: Alice\n  age: 30\n- name: Bob\n",
            )),
        };

        let err = run(&options).unwrap_err();

        match err {
            PairgenError::MissingPlaceholder {
                key,
                record,
                section,
            } => {
                assert_eq!(key, "age");
                assert_eq!(record, 1);
                assert_eq!(section, Section::Code);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!options.output.exists());
    }

    #[test]
    fn test_missing_placeholder_keeps_previous_output() {
        let fx = Fixture::new();
        let output = fx.write("out.csv", "user_query,code\nold,row\n");
        let options = RunOptions {
            template: fx.write("template.txt", "{absent}\n---\ncode"),
            output: output.clone(),
            params: None,
        };

        assert!(run(&options).is_err());
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "user_query,code\nold,row\n"
        );
    }

    #[test]
    fn test_missing_output_dir_is_io_failure() {
        let fx = Fixture::new();
        let options = RunOptions {
            template: fx.write("template.txt", "Hello {name}\n---\nprint('{name}')\n"),
            output: fx.path("no_such_dir").join("out.csv"),
            params: Some(fx.write("params.json", r#"[{"name":"Alice"}]"#)),
        };

        let err = run(&options).unwrap_err();

        match err {
            PairgenError::IoFailure { path, .. } => assert_eq!(path, options.output),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!fx.path("no_such_dir").exists());
    }

    #[test]
    fn test_missing_template_is_io_failure() {
        let fx = Fixture::new();
        let options = RunOptions {
            template: fx.path("absent.txt"),
            output: fx.path("out.csv"),
            params: None,
        };

        let err = run(&options).unwrap_err();
        assert!(matches!(err, PairgenError::IoFailure { .. }));
    }

    #[test]
    fn test_invalid_params_file() {
        let fx = Fixture::new();
        let options = RunOptions {
            template: fx.write("template.txt", "{x}\n---\n{x}"),
            output: fx.path("out.csv"),
            params: Some(fx.write("params.json", r#"{"x": 1}"#)),
        };

        let err = run(&options).unwrap_err();
        assert!(matches!(err, PairgenError::InvalidParams(_)));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_empty_records_write_header_only() {
        let fx = Fixture::new();
        let options = RunOptions {
            template: fx.write("template.txt", "{x}\n---\n{x}"),
            output: fx.path("out.csv"),
            params: Some(fx.write("params.json", "[]")),
        };

        assert_eq!(run(&options).unwrap(), 0);
        assert_eq!(
            fs::read_to_string(&options.output).unwrap(),
            "user_query,code\n"
        );
    }

    #[test]
    fn test_options_from_cli() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["pairgen", "t.txt", "o.csv", "-p", "r.yml"]).unwrap();
        let options = RunOptions::from(&cli);
        assert_eq!(options.template, PathBuf::from("t.txt"));
        assert_eq!(options.output, PathBuf::from("o.csv"));
        assert_eq!(options.params, Some(PathBuf::from("r.yml")));
    }
}
