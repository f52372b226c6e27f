use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

use crate::employee::{Employee, EmployeeId};

pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 1;
const RANDOM_STRING_MAX: usize = 10;

const DEPARTMENTS: [&str; 5] = ["Engineering", "Sales", "Finance", "Support", "Legal"];

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for EmployeeId {
    fn gen(rng: &mut ThreadRng) -> Self {
        // the range is within EmployeeId::MAX
        EmployeeId::new(rng.gen_range(0..=EmployeeId::MAX)).unwrap()
    }
}

impl Random for Employee {
    fn gen(rng: &mut ThreadRng) -> Self {
        let id = EmployeeId::gen(rng);
        let name = format!("{} {}", String::gen(rng), String::gen(rng));
        let department = DEPARTMENTS[rng.gen_range(0..DEPARTMENTS.len())];
        let salary = rng.gen_range(20_000..200_000) as f64;

        Employee::new(id, &name, department, salary)
    }
}
