use std::sync::Arc;
use std::thread;

use tagdb_concurrent::ConcurrentOrderedMap;

const THREADS: u64 = 8;
const PER_THREAD: u64 = 500;

#[test]
fn disjoint_inserts_are_not_lost() {
	let map = Arc::new(ConcurrentOrderedMap::new());

	let handles: Vec<_> = (0..THREADS)
		.map(|t| {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				for i in 0..PER_THREAD {
					assert!(map.insert(t * PER_THREAD + i, t));
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(map.len() as u64, THREADS * PER_THREAD);
	assert_eq!(map.keys(), (0..THREADS * PER_THREAD).collect::<Vec<_>>());
}

#[test]
fn colliding_inserts_have_one_winner_per_key() {
	let map = Arc::new(ConcurrentOrderedMap::new());

	let handles: Vec<_> = (0..THREADS)
		.map(|t| {
			let map = Arc::clone(&map);
			thread::spawn(move || (0..PER_THREAD).filter(|&i| map.insert(i, t)).count())
		})
		.collect();
	let wins: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

	assert_eq!(wins as u64, PER_THREAD);
	assert_eq!(map.len() as u64, PER_THREAD);
}

#[test]
fn get_or_create_under_contention_counts_every_hit() {
	let map: Arc<ConcurrentOrderedMap<u8, u64>> = Arc::new(ConcurrentOrderedMap::new());

	let handles: Vec<_> = (0..THREADS)
		.map(|_| {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				for i in 0..PER_THREAD {
					map.with_or_default((i % 4) as u8, |n| *n += 1);
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(map.len(), 4);
	assert_eq!(map.values().iter().sum::<u64>(), THREADS * PER_THREAD);
}

#[test]
fn readers_run_alongside_writers() {
	let map: Arc<ConcurrentOrderedMap<u64, u64>> = Arc::new(ConcurrentOrderedMap::new());

	let writer = {
		let map = Arc::clone(&map);
		thread::spawn(move || {
			for i in 0..PER_THREAD {
				map.insert(i, i * 2);
			}
		})
	};
	let readers: Vec<_> = (0..4)
		.map(|_| {
			let map = Arc::clone(&map);
			thread::spawn(move || {
				for i in 0..PER_THREAD {
					if let Some(v) = map.get(&i) {
						assert_eq!(v, i * 2);
					}
				}
			})
		})
		.collect();

	writer.join().unwrap();
	for reader in readers {
		reader.join().unwrap();
	}
	assert_eq!(map.len() as u64, PER_THREAD);
}
