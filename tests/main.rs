use argset::{
    derive::*, Action, ArgParser, ArgSet, ArgSetConfig, Argument, ConfigError, ConversionError,
    HelpMode, List, Nargs, ParseError, Scalar,
};

#[test]
fn builder_parses() {
    let mut pos1: isize = 0;
    let mut opt1: String = String::default();
    let mut sw1: bool = false;
    let mut arg_set = ArgSet::new()
        .add("pos1", Argument::positional(Scalar::new(&mut pos1), "pos1 help"))
        .add("opt1", Argument::optional(Scalar::new(&mut opt1), "opt1 help"))
        .add("sw1", Argument::optional(Scalar::new(&mut sw1), "sw1 help"));

    let action = arg_set
        .parse_tokens(&["42", "--opt1", "hello", "--sw1"])
        .unwrap();
    drop(arg_set);

    assert_eq!(action, Action::Complete);
    assert_eq!(pos1, 42);
    assert_eq!(opt1, "hello");
    assert!(sw1);
}

#[test]
fn builder_errors() {
    let mut pos1: isize = 0;
    let mut pos2: isize = 0;
    let mut opt1: String = String::default();
    let mut arg_set = ArgSet::new()
        .add("pos1", Argument::positional(Scalar::new(&mut pos1), ""))
        .add("pos2", Argument::positional(Scalar::new(&mut pos2), ""))
        .add("opt1", Argument::optional(Scalar::new(&mut opt1), ""));

    assert_eq!(
        arg_set.parse_tokens(&["7"]).unwrap_err(),
        ParseError::MissingPositional {
            argument: "pos2".to_string()
        }
    );
    assert_eq!(
        arg_set.parse_tokens(&["7", "--opt1"]).unwrap_err(),
        ParseError::InsufficientArgs {
            argument: "--opt1".to_string(),
            required: 1,
            given: 0,
        }
    );
    assert_eq!(
        arg_set.parse_tokens(&["7", "--nope"]).unwrap_err(),
        ParseError::UnknownOption {
            name: "--nope".to_string()
        }
    );
    assert_eq!(
        arg_set
            .parse_tokens(&["--opt1", "a", "--opt1", "b"])
            .unwrap_err(),
        ParseError::DuplicateOption {
            name: "--opt1".to_string()
        }
    );
    assert_eq!(
        arg_set.parse_tokens(&["1", "2", "3"]).unwrap_err(),
        ParseError::UnknownPositional {
            token: "3".to_string()
        }
    );
    assert!(matches!(
        arg_set.parse_tokens(&["1", "x"]).unwrap_err(),
        ParseError::Value {
            argument,
            cause: ConversionError::Syntax { .. },
        } if argument == "pos2"
    ));
}

#[test]
fn builder_help() {
    let mut value: u32 = 0;
    let mut arg_set = ArgSet::new().add(
        "value",
        Argument::positional(Scalar::new(&mut value), "The value."),
    );
    assert_eq!(arg_set.parse_tokens(&["--help"]).unwrap(), Action::PrintHelp);

    let mut value: u32 = 0;
    let mut arg_set = ArgSet::with_config(ArgSetConfig {
        help: HelpMode::Checked,
        ..ArgSetConfig::default()
    })
    .add(
        "value",
        Argument::positional(Scalar::new(&mut value), "The value."),
    );
    assert_eq!(
        arg_set.parse_tokens(&["--help"]).unwrap_err(),
        ParseError::MissingPositional {
            argument: "value".to_string()
        }
    );
    assert_eq!(
        arg_set.parse_tokens(&["--help", "3"]).unwrap(),
        Action::PrintHelp
    );
}

#[test]
fn builder_unlimited() {
    let mut items: Vec<String> = Vec::default();
    let mut flag: bool = false;
    let mut arg_set = ArgSet::new()
        .add(
            "items",
            Argument::optional(List::new(&mut items), "")
                .with_nargs(Nargs::Unlimited)
                .unwrap(),
        )
        .add("flag", Argument::switch(Scalar::new(&mut flag), "").unwrap());

    arg_set
        .parse_tokens(&["--items", "a", "--flag", "b"])
        .unwrap();
    drop(arg_set);

    assert_eq!(items, vec!["a", "--flag", "b"]);
    assert!(!flag);
}

#[test]
fn builder_config_errors() {
    let mut value: u32 = 0;
    assert_eq!(
        Argument::positional(Scalar::new(&mut value), "")
            .with_nargs(Nargs::Precisely(0))
            .unwrap_err()
            .to_string(),
        "positional argument must consume at least 1 token."
    );

    let mut value: u32 = 0;
    assert!(matches!(
        Argument::switch(Scalar::new(&mut value), "").unwrap_err(),
        ConfigError::NotSwitchType { .. }
    ));
}

#[test]
fn parser_exit_codes() {
    let mut value: u32 = 0;
    let parser = ArgParser::new(
        "program",
        ArgSet::new().add("value", Argument::positional(Scalar::new(&mut value), "")),
    );
    assert!(parser.usage().starts_with("usage: program [--help] VALUE"));
    assert_eq!(parser.parse_tokens(&["5"]), Ok(()));
    assert_eq!(value, 5);

    let mut value: u32 = 0;
    let parser = ArgParser::new(
        "program",
        ArgSet::new().add("value", Argument::positional(Scalar::new(&mut value), "")),
    );
    assert_eq!(parser.parse_tokens(&["x"]), Err(1));

    let mut value: u32 = 0;
    let parser = ArgParser::new(
        "program",
        ArgSet::new().add("value", Argument::positional(Scalar::new(&mut value), "")),
    );
    assert_eq!(parser.parse_tokens(&["--help"]), Err(0));
}

#[derive(Debug, Default, ArgSetFrom)]
#[argset(description = "Employee tool.")]
struct Employee {
    #[argset(positional, help = "Employee salary.")]
    salary: f64,
    #[argset(name = "emp-id", nargs = 3)]
    emp_ids: Vec<i32>,
    #[argset(switch)]
    is_intern: bool,
    #[argset(option)]
    department: String,
    untagged: u8,
}

#[test]
fn derive_parses() {
    let mut employee = Employee {
        untagged: 9,
        ..Employee::default()
    };
    let mut arg_set = employee.arg_set().unwrap();
    assert_eq!(arg_set.get_description(), Some("Employee tool."));

    arg_set
        .parse_tokens(&[
            "--emp-id",
            "8",
            "3",
            "1",
            "3.4",
            "--is-intern",
            "--department",
            "sales",
        ])
        .unwrap();
    drop(arg_set);

    assert_eq!(employee.salary, 3.4);
    assert_eq!(employee.emp_ids, vec![8, 3, 1]);
    assert!(employee.is_intern);
    assert_eq!(employee.department, "sales");
    assert_eq!(employee.untagged, 9);
}

#[test]
fn derive_flags() {
    let mut employee = Employee::default();
    let arg_set = employee.arg_set().unwrap();
    let flags: Vec<&str> = arg_set.optionals().map(|(flag, _)| flag).collect();
    let positionals: Vec<&str> = arg_set.positionals().map(|(name, _)| name).collect();

    assert_eq!(
        flags,
        vec!["--department", "--emp-id", "--help", "--is-intern"]
    );
    assert_eq!(positionals, vec!["salary"]);
}

#[derive(Debug, Default, ArgSetFrom)]
#[argset(prefix = "/")]
struct Slashed {
    #[argset(positional, nargs = unlimited)]
    items: Vec<u32>,
    #[argset(switch)]
    verbose: bool,
}

#[test]
fn derive_prefix() {
    let mut slashed = Slashed::default();
    let mut arg_set = slashed.arg_set().unwrap();

    arg_set.parse_tokens(&["/verbose", "1", "2", "3"]).unwrap();
    drop(arg_set);

    assert!(slashed.verbose);
    assert_eq!(slashed.items, vec![1, 2, 3]);
}

#[derive(Debug, Default, ArgSetFrom)]
struct Misconfigured {
    #[argset(switch)]
    count: u32,
}

#[test]
fn derive_config_error() {
    let mut misconfigured = Misconfigured::default();
    let error = misconfigured.arg_set().unwrap_err();

    assert_eq!(
        error,
        ConfigError::Field {
            field: "count".to_string(),
            cause: Box::new(ConfigError::NotSwitchType {
                type_name: "u32".to_string()
            }),
        }
    );
}
