use argset::{ArgParser, ArgSet, Argument, ConfigError, List, Nargs, Scalar};

fn main() -> Result<(), ConfigError> {
    let mut salary: f64 = 0.0;
    let mut emp_ids: Vec<i32> = Vec::default();
    let mut department: String = "engineering".to_string();
    let mut intern: bool = false;

    let arg_set = ArgSet::new()
        .description("Record an employee's salary.")
        .add(
            "salary",
            Argument::positional(Scalar::new(&mut salary), "The yearly salary."),
        )
        .add(
            "emp-id",
            Argument::optional(List::new(&mut emp_ids), "The employee ids.")
                .with_nargs(Nargs::Unlimited)?,
        )
        .add(
            "department",
            Argument::optional(Scalar::new(&mut department), "The department."),
        )
        .add(
            "is-intern",
            Argument::switch(Scalar::new(&mut intern), "Whether the employee is an intern.")?,
        );

    ArgParser::new("manual", arg_set).parse();
    println!("salary: {salary}");
    println!("emp_ids: {emp_ids:?}");
    println!("department: {department}");
    println!("intern: {intern}");
    Ok(())
}
