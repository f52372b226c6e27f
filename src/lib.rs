pub mod employee;
pub mod hashtable;
pub mod linkedlist;
pub mod loader;
pub mod logger;
pub mod store;
pub mod tree;
pub mod util;
