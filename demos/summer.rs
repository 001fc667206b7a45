use opt::{Command, CommandConfig, ParameterConfig, Value};

fn main() {
    let mut command = Command::with_config(
        "summer",
        CommandConfig::default().about("Sum the items."),
    );
    command
        .option(
            "--help, -h",
            ParameterConfig::default().help("Show this help message and exit."),
        )
        .expect("the help option is well formed")
        .option(
            "items",
            ParameterConfig::default()
                .name("item")
                .nargs("+")
                .help("The items to sum."),
        )
        .expect("the items parameter is well formed");

    let matches = command.build().parse();

    match matches.get("item") {
        Some(Value::List(items)) => {
            let mut sum: i64 = 0;

            for item in items {
                match item.parse::<i64>() {
                    Ok(value) => sum += value,
                    Err(_) => {
                        eprintln!("'{item}' is not an integer.");
                        std::process::exit(1);
                    }
                }
            }

            println!("Sum: {sum}");
        }
        _ => println!("Sum: 0"),
    }
}
