use hrstore::employee::{Employee, EmployeeId};
use hrstore::store::EmployeeStore;
use hrstore::util::random::Random;
use rand::prelude::SliceRandom;
use rand::prelude::ThreadRng;
use rand::thread_rng;
use rand::Rng;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
enum Operation {
    Insert,
    Find,
    Delete,
    Adjust,
}

#[derive(PartialEq)]
enum OperationType {
    Some, // the operation for existing id on the store
    None, // the operation for not existing id on the store
}

pub fn id(value: u32) -> EmployeeId {
    EmployeeId::new(value).unwrap()
}

pub fn employee(value: u32) -> Employee {
    Employee::new(
        id(value),
        &format!("Employee {}", value),
        "Engineering",
        1000.0 + value as f64,
    )
}

pub fn ids<S: EmployeeStore>(store: &S) -> Vec<u32> {
    store.employees().iter().map(|e| e.id().value()).collect()
}

fn assert_same(found: &Employee, expected: &Employee) {
    assert_eq!(found.id(), expected.id());
    assert_eq!(found.name(), expected.name());
    assert_eq!(found.department(), expected.department());
    assert_eq!(found.salary(), expected.salary());
}

/// The behaviour every store shares, whatever its layout.
pub fn check_contract<S>(mut store: S)
where
    S: EmployeeStore + Clone,
{
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.find(&id(100)).is_none());
    assert_eq!(store.delete(&id(100)), Err(()));
    assert!(!store.update_department(&id(100), "Sales"));
    assert!(!store.adjust_salary(&id(100), 1.0));
    assert_eq!(store.ascending(), "");

    // insert then find
    for value in [300, 100, 200] {
        assert!(store.insert(employee(value)).is_ok());
    }
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
    assert_same(store.find(&id(200)).unwrap(), &employee(200));

    // duplicates are rejected without overwriting
    let duplicate = Employee::new(id(100), "Other", "Legal", 1.0);
    let rejected = store.insert(duplicate).unwrap_err();
    assert_eq!(rejected.name(), "Other");
    assert_eq!(store.len(), 3);
    assert_same(store.find(&id(100)).unwrap(), &employee(100));

    assert_eq!(ids(&store), vec![100, 200, 300]);
    assert_eq!(
        store.ascending(),
        format!("{}\n{}\n{}\n", employee(100), employee(200), employee(300))
    );
    assert_eq!(
        store.descending(),
        format!("{}\n{}\n{}\n", employee(300), employee(200), employee(100))
    );

    // updates
    assert!(store.update_department(&id(300), "Sales"));
    assert!(store.adjust_salary(&id(300), 250.0));
    assert!(store.adjust_salary(&id(300), -50.0));
    let updated = store.find(&id(300)).unwrap();
    assert_eq!(updated.department(), "Sales");
    assert_eq!(updated.salary(), 1300.0 + 200.0);

    // copies do not share records
    let mut copy = store.clone();
    assert_eq!(ids(&copy), ids(&store));
    assert!(copy.adjust_salary(&id(100), 1.0));
    assert!(copy.update_department(&id(100), "Legal"));
    assert_eq!(store.find(&id(100)).unwrap().department(), "Engineering");
    assert_eq!(store.find(&id(100)).unwrap().salary(), 1100.0);

    // delete
    let removed = store.delete(&id(200)).unwrap();
    assert_same(&removed, &employee(200));
    assert_eq!(store.len(), 2);
    assert!(store.find(&id(200)).is_none());
    assert!(!store.contains(&id(200)));
    assert_eq!(ids(&store), vec![100, 300]);

    assert_eq!(store.delete(&id(200)), Err(()));
    assert_eq!(store.len(), 2);

    // the copy still holds the deleted employee
    assert_eq!(ids(&copy), vec![100, 200, 300]);
    assert_eq!(copy.len(), 3);

    assert!(store.delete(&id(100)).is_ok());
    assert!(store.delete(&id(300)).is_ok());
    assert!(store.is_empty());
    assert_eq!(store.ascending(), "");
}

pub fn stress_sequential<S>(mut store: S, iter: u64)
where
    S: EmployeeStore,
{
    // 10 times try to get not existing id, or return if failing
    let gen_not_existing_id = |rng: &mut ThreadRng, map: &BTreeMap<EmployeeId, Employee>| {
        let mut key = EmployeeId::gen(rng);

        for _ in 0..10 {
            if !map.contains_key(&key) {
                return Ok(key);
            }

            key = EmployeeId::gen(rng);
        }

        Err(())
    };

    let ops = [
        Operation::Insert,
        Operation::Find,
        Operation::Delete,
        Operation::Adjust,
    ];
    let types = [OperationType::Some, OperationType::None];

    let mut ref_map: BTreeMap<EmployeeId, Employee> = BTreeMap::new();
    let mut rng = thread_rng();

    for i in 1..=iter {
        let t = types.choose(&mut rng).unwrap();
        let ref_map_keys = ref_map.keys().collect::<Vec<&EmployeeId>>();
        let existing_id = ref_map_keys.choose(&mut rng).map(|id| **id);

        if existing_id.is_none() || *t == OperationType::None {
            // run operation with not existing id
            let not_existing_id = if let Ok(id) = gen_not_existing_id(&mut rng, &ref_map) {
                id
            } else {
                continue;
            };

            match ops.choose(&mut rng).unwrap() {
                Operation::Insert => {
                    // should success
                    let mut data = Employee::gen(&mut rng);
                    data = Employee::new(
                        not_existing_id,
                        data.name(),
                        data.department(),
                        data.salary(),
                    );

                    println!("[{:0>10}] InsertNone: {}", i, data);
                    assert!(store.insert(data.clone()).is_ok());
                    assert!(ref_map.insert(not_existing_id, data).is_none());
                }
                Operation::Find => {
                    // should fail
                    println!("[{:0>10}] FindNone: {}", i, not_existing_id);
                    assert!(store.find(&not_existing_id).is_none());
                }
                Operation::Delete => {
                    // should fail
                    println!("[{:0>10}] DeleteNone: {}", i, not_existing_id);
                    assert_eq!(store.delete(&not_existing_id), Err(()));
                }
                Operation::Adjust => {
                    // should fail
                    println!("[{:0>10}] AdjustNone: {}", i, not_existing_id);
                    assert!(!store.adjust_salary(&not_existing_id, 1.0));
                }
            }
        } else {
            // run operation with existing id
            let existing_id = existing_id.unwrap();

            match ops.choose(&mut rng).unwrap() {
                Operation::Insert => {
                    // should fail
                    let data = Employee::new(existing_id, "Dup", "Dup", 0.0);

                    println!("[{:0>10}] InsertSome: {}", i, data);
                    assert!(store.insert(data).is_err());
                }
                Operation::Find => {
                    // should success
                    let data = &ref_map[&existing_id];

                    println!("[{:0>10}] FindSome: {}", i, data);
                    assert_same(store.find(&existing_id).unwrap(), data);
                }
                Operation::Delete => {
                    // should success
                    let data = ref_map.remove(&existing_id).unwrap();

                    println!("[{:0>10}] DeleteSome: {}", i, data);
                    assert_same(&store.delete(&existing_id).unwrap(), &data);
                }
                Operation::Adjust => {
                    // should success
                    let delta = rng.gen_range(-100..100) as f64;
                    let data = ref_map.get_mut(&existing_id).unwrap();
                    data.set_salary(data.salary() + delta);

                    println!("[{:0>10}] AdjustSome: {} by {}", i, data, delta);
                    assert!(store.adjust_salary(&existing_id, delta));
                    assert_same(store.find(&existing_id).unwrap(), data);
                }
            }
        }

        assert_eq!(store.len(), ref_map.len());
    }

    assert_eq!(
        ids(&store),
        ref_map.keys().map(|id| id.value()).collect::<Vec<_>>()
    );
}
