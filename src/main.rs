use std::{env, process};

use hrstore::{
    employee::EmployeeId, loader, logger::initialize_logger, store::EmployeeStore,
    tree::BinaryTree,
};

const DEFAULT_PATH: &str = "Employee.txt";
const DELETED_ID: &str = "54325";

fn main() {
    initialize_logger();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());

    let mut tree = BinaryTree::new();
    match loader::load_file(&path, &mut tree) {
        Ok(report) => log::info!(
            "loaded {} employees from {} ({} duplicates skipped)",
            report.inserted,
            path,
            report.duplicates
        ),
        Err(err) => {
            eprintln!("error: {}: {}", path, err);
            process::exit(1);
        }
    }

    println!("{}", tree);

    let copy = tree.clone();

    let id: EmployeeId = match DELETED_ID.parse() {
        Ok(id) => id,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };
    println!("{}", tree.delete(&id).is_ok());
    println!("{}", copy);
}
