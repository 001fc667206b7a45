use opt::{Command, CommandConfig, DefinitionError, ParameterConfig, Value};

fn configure() -> Result<Command, DefinitionError> {
    let mut command = Command::with_config(
        "git-like",
        CommandConfig::default().about("A demo of nested sub-commands."),
    );
    command
        .option(
            "--help, -h",
            ParameterConfig::default()
                .global()
                .help("Show this help message and exit."),
        )?
        .option(
            "--verbose, -v",
            ParameterConfig::default()
                .global()
                .default_value(false)
                .help("Print more details."),
        )?
        .command(
            "add",
            CommandConfig::default().about("Add file contents to the index."),
            |add| {
                add.option(
                    "--all, -A",
                    ParameterConfig::default()
                        .default_value(false)
                        .help("Add all the files."),
                )?
                .option(
                    "paths",
                    ParameterConfig::default()
                        .nargs("*")
                        .help("The files to add."),
                )?;
                Ok(())
            },
        )?
        .command(
            "remote",
            CommandConfig::default().about("Manage the tracked repositories."),
            |remote| {
                remote.command(
                    "rename",
                    CommandConfig::default().about("Rename a remote."),
                    |rename| {
                        rename.option(
                            "names",
                            ParameterConfig::default()
                                .nargs(2)
                                .help("The old and new names."),
                        )?;
                        Ok(())
                    },
                )?;
                Ok(())
            },
        )?;

    Ok(command)
}

fn main() {
    let command = match configure() {
        Ok(command) => command,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };
    let matches = command.build().parse();

    if matches.flag("verbose") {
        for (name, value) in matches.iter() {
            println!("{name}: {value:?}");
        }
    }

    match matches.commands().join(" ").as_str() {
        "add" => match matches.get("paths") {
            Some(Value::List(paths)) => println!("Adding: {}", paths.join(", ")),
            _ if matches.flag("all") => println!("Adding everything."),
            _ => println!("Nothing specified, nothing added."),
        },
        "remote rename" => {
            if let Some([old, new]) = matches.list("names") {
                println!("Renaming '{old}' to '{new}'.");
            }
        }
        other => println!("Nothing to do for '{other}'."),
    }
}
