use crate::util::store::{check_contract, employee, id, ids, stress_sequential};
use hrstore::hashtable::{HashTable, DEFAULT_TABLE_SIZE};
use hrstore::store::EmployeeStore;

#[test]
fn test_hashtable() {
    check_contract(HashTable::new());
    check_contract(HashTable::with_table_size(1));
    check_contract(HashTable::with_table_size(7));
}

#[test]
fn test_table_size() {
    assert_eq!(HashTable::new().table_size(), DEFAULT_TABLE_SIZE);
    assert_eq!(HashTable::with_table_size(5).table_size(), 5);
    assert_eq!(HashTable::with_table_size(5).clone().table_size(), 5);
}

#[test]
#[should_panic]
fn test_zero_table_size() {
    let _ = HashTable::with_table_size(0);
}

#[test]
fn test_collision() {
    let mut table = HashTable::with_table_size(5);

    assert!(table.insert(employee(3)).is_ok());
    assert!(table.insert(employee(8)).is_ok());

    assert_eq!(table.bucket_index(&id(3)), 3);
    assert_eq!(table.bucket_index(&id(8)), 3);
    assert_eq!(table.bucket_len(3), 2);
    assert_eq!(table.bucket_len(0), 0);
    assert_eq!(table.bucket_len(42), 0);

    assert_eq!(table.find(&id(3)).map(|e| e.salary()), Some(1003.0));
    assert_eq!(table.find(&id(8)).map(|e| e.salary()), Some(1008.0));
    assert!(table.find(&id(13)).is_none());

    // delete from the tail of the chain, then the head
    assert!(table.delete(&id(3)).is_ok());
    assert_eq!(table.bucket_len(3), 1);
    assert!(table.find(&id(8)).is_some());
    assert!(table.delete(&id(8)).is_ok());
    assert_eq!(table.bucket_len(3), 0);
    assert!(table.is_empty());
}

#[test]
fn test_dump_ignores_bucket_order() {
    let mut table = HashTable::with_table_size(3);

    for value in [11, 4, 9, 1, 6, 3] {
        assert!(table.insert(employee(value)).is_ok());
    }

    assert_eq!(ids(&table), vec![1, 3, 4, 6, 9, 11]);
    assert_eq!(table.to_string(), table.ascending());
}

#[test]
fn stress_hashtable() {
    stress_sequential(HashTable::new(), 10_000);
    stress_sequential(HashTable::with_table_size(13), 10_000);
}
