use ahash::AHasher;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use crate::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;

pub type AHashMap<K, V> = HashMap<K, V, BuildHasherDefault<AHasher>>;

/// Hit counts per distinct parameter combination. Grows without eviction.
pub type StatsTable = AHashMap<FizzBuzzParams, u64>;
