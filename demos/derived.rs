use argset::{derive::*, ArgParser, ConfigError};

#[derive(Debug, Default, ArgSetFrom)]
#[argset(description = "Sum some items, optionally scaled.")]
struct Parameters {
    #[argset(positional, nargs = unlimited, help = "The items to sum.")]
    items: Vec<u32>,
    #[argset(help = "Multiply the sum by this factor.")]
    scale: u32,
    #[argset(switch, name = "verbose", help = "Print the parameters.")]
    loud: bool,
}

fn main() -> Result<(), ConfigError> {
    let mut parameters = Parameters {
        scale: 1,
        ..Parameters::default()
    };
    ArgParser::new("derived", parameters.arg_set()?).parse();

    if parameters.loud {
        println!("{parameters:?}");
    }

    let sum: u32 = parameters.items.iter().sum();
    println!("Sum: {}", sum * parameters.scale);
    Ok(())
}
