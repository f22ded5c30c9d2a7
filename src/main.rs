use venule::shell::Shell;

fn main() {
    let mut shell = match Shell::new() {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("venule: {}", e);
            std::process::exit(-1);
        }
    };

    if let Err(e) = shell.run() {
        eprintln!("venule: {}", e);
        std::process::exit(-1);
    }
}
