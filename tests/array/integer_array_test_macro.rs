/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate the shared test suite for atomic integer arrays.
#[macro_export]
macro_rules! test_atomic_integer_array {
    ($array_type:ident, $value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atomic_array::{
                $array_type,
                AtomicArrayError,
            };
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_new_is_zeroed() {
                let array = <$array_type>::new(5);
                assert_eq!(array.len(), 5);
                assert!(!array.is_empty());
                for i in 0..5 {
                    assert_eq!(array.get(i), 0);
                }
            }

            #[test]
            fn test_new_empty() {
                let array = <$array_type>::new(0);
                assert_eq!(array.len(), 0);
                assert!(array.is_empty());
                assert!(array.to_vec().is_empty());
            }

            #[test]
            fn test_default_is_empty() {
                let array = <$array_type>::default();
                assert!(array.is_empty());
            }

            #[test]
            fn test_try_new() {
                let array = <$array_type>::try_new(4).unwrap();
                assert_eq!(array.len(), 4);
                assert_eq!(array.to_vec(), vec![0; 4]);

                let empty = <$array_type>::try_new(0).unwrap();
                assert!(empty.is_empty());
            }

            #[test]
            fn test_try_new_negative_length() {
                let err = <$array_type>::try_new(-1).unwrap_err();
                assert_eq!(err, AtomicArrayError::InvalidArgument { length: -1 });
                assert_eq!(
                    err.to_string(),
                    "invalid argument: array length must be non-negative, got -1"
                );

                let err = <$array_type>::try_new(isize::MIN).unwrap_err();
                assert_eq!(
                    err,
                    AtomicArrayError::InvalidArgument { length: isize::MIN }
                );
            }

            #[test]
            fn test_try_new_capacity_overflow() {
                match <$array_type>::try_new(isize::MAX) {
                    Err(AtomicArrayError::AllocationFailed { length, .. }) => {
                        assert_eq!(length, isize::MAX as usize);
                    }
                    other => panic!("expected allocation failure, got {:?}", other),
                }
            }

            #[test]
            fn test_from_slice() {
                let values: Vec<$value_type> = vec![3, 1, 4, 1, 5];
                let array = <$array_type>::from_slice(&values);
                assert_eq!(array.len(), values.len());
                for (i, v) in values.iter().enumerate() {
                    assert_eq!(array.get(i), *v);
                }
            }

            #[test]
            fn test_from_slice_does_not_alias() {
                let mut values: Vec<$value_type> = vec![1, 2, 3];
                let array = <$array_type>::from_slice(&values);
                values[0] = 100;
                assert_eq!(array.get(0), 1);
                array.set(1, 200);
                assert_eq!(values[1], 2);
            }

            #[test]
            fn test_from_conversions() {
                let from_vec = <$array_type>::from(vec![7, 8, 9]);
                assert_eq!(from_vec.to_vec(), vec![7, 8, 9]);

                let slice: &[$value_type] = &[4, 5];
                let from_slice = <$array_type>::from(slice);
                assert_eq!(from_slice.to_vec(), vec![4, 5]);

                let collected: $array_type = (0..4).collect();
                assert_eq!(collected.to_vec(), vec![0, 1, 2, 3]);
            }

            #[test]
            fn test_get_set() {
                let array = <$array_type>::new(3);
                array.set(1, 42);
                assert_eq!(array.get(1), 42);
                array.set(1, -10);
                assert_eq!(array.get(1), -10);
                assert_eq!(array.get(0), 0);
                assert_eq!(array.get(2), 0);
            }

            #[test]
            fn test_plain_accessors() {
                let array = <$array_type>::new(2);
                array.set_plain(0, 17);
                assert_eq!(array.get_plain(0), 17);
                assert_eq!(array.get(0), 17);
                array.set(1, 23);
                assert_eq!(array.get_plain(1), 23);
            }

            #[test]
            fn test_lazy_set() {
                let array = <$array_type>::new(2);
                array.lazy_set(1, 99);
                assert_eq!(array.get(1), 99);
            }

            #[test]
            fn test_add() {
                let array = <$array_type>::from_slice(&[10]);
                assert_eq!(array.add(0, 5), 15);
                assert_eq!(array.add(0, -5), 10);
                assert_eq!(array.add(0, -20), -10);
                assert_eq!(array.get(0), -10);
            }

            #[test]
            fn test_get_and_add() {
                let array = <$array_type>::from_slice(&[10]);
                assert_eq!(array.get_and_add(0, 5), 10);
                assert_eq!(array.get(0), 15);
                assert_eq!(array.get_and_add(0, -15), 15);
                assert_eq!(array.get(0), 0);
            }

            #[test]
            fn test_increment() {
                let array = <$array_type>::new(1);
                assert_eq!(array.increment(0), 1);
                assert_eq!(array.increment(0), 2);
                assert_eq!(array.increment_by(0, 10), 12);
                assert_eq!(array.get(0), 12);
            }

            #[test]
            fn test_decrement() {
                let array = <$array_type>::from_slice(&[10]);
                assert_eq!(array.decrement(0), 9);
                assert_eq!(array.decrement_by(0, 4), 5);
                assert_eq!(array.decrement_by(0, -5), 10);
                assert_eq!(array.get(0), 10);
            }

            #[test]
            fn test_decrement_by_min_value() {
                let array = <$array_type>::new(1);
                assert_eq!(
                    array.decrement_by(0, <$value_type>::MIN),
                    <$value_type>::MIN
                );
            }

            #[test]
            fn test_get_and_increment() {
                let array = <$array_type>::from_slice(&[5]);
                assert_eq!(array.get_and_increment(0), 5);
                assert_eq!(array.get(0), 6);
                assert_eq!(array.get_and_increment_by(0, 4), 6);
                assert_eq!(array.get(0), 10);
            }

            #[test]
            fn test_get_and_decrement() {
                let array = <$array_type>::from_slice(&[5]);
                assert_eq!(array.get_and_decrement(0), 5);
                assert_eq!(array.get(0), 4);
                assert_eq!(array.get_and_decrement_by(0, 4), 4);
                assert_eq!(array.get(0), 0);
            }

            #[test]
            fn test_arithmetic_wraps() {
                let array = <$array_type>::from_slice(&[<$value_type>::MAX, <$value_type>::MIN]);
                assert_eq!(array.increment(0), <$value_type>::MIN);
                assert_eq!(array.decrement(1), <$value_type>::MAX);
            }

            #[test]
            fn test_get_and_set() {
                let array = <$array_type>::from_slice(&[10, 20]);
                assert_eq!(array.get_and_set(1, 30), 20);
                assert_eq!(array.get(1), 30);
                assert_eq!(array.get(0), 10);
            }

            #[test]
            fn test_get_and_reset() {
                let array = <$array_type>::from_slice(&[10, 20]);
                assert_eq!(array.get_and_reset(0), 10);
                assert_eq!(array.get(0), 0);
                assert_eq!(array.get_and_reset(0), 0);
            }

            #[test]
            fn test_compare_and_swap_success() {
                let array = <$array_type>::from_slice(&[10]);
                assert!(array.compare_and_swap(0, 10, 20));
                assert_eq!(array.get(0), 20);
            }

            #[test]
            fn test_compare_and_swap_failure() {
                let array = <$array_type>::from_slice(&[10]);
                assert!(!array.compare_and_swap(0, 15, 20));
                assert_eq!(array.get(0), 10);
            }

            #[test]
            fn test_operations_on_distinct_indices() {
                let array = <$array_type>::new(4);
                array.increment(0);
                array.add(1, 10);
                array.get_and_set(2, 20);
                assert!(array.compare_and_swap(3, 0, 30));
                assert_eq!(array.to_vec(), vec![1, 10, 20, 30]);
            }

            #[test]
            fn test_footprint() {
                let element = std::mem::size_of::<$value_type>();
                let base = <$array_type>::estimated_footprint(0);
                assert!(base > 0);
                assert_eq!(<$array_type>::estimated_footprint(10), base + 10 * element);
                assert_eq!(<$array_type>::new(7).footprint(), base + 7 * element);
                assert_eq!(<$array_type>::estimated_footprint(usize::MAX), usize::MAX);
            }

            #[test]
            fn test_to_vec_and_into_vec() {
                let array = <$array_type>::from_slice(&[1, 2, 3]);
                array.increment(2);
                assert_eq!(array.to_vec(), vec![1, 2, 4]);
                assert_eq!(array.into_vec(), vec![1, 2, 4]);
            }

            #[test]
            fn test_clone_is_deep() {
                let array = <$array_type>::from_slice(&[1, 2]);
                let copy = array.clone();
                array.set(0, 100);
                assert_eq!(copy.get(0), 1);
                assert_eq!(copy.to_vec(), vec![1, 2]);
            }

            #[test]
            fn test_debug_display() {
                let array = <$array_type>::from_slice(&[1, -2, 3]);
                assert_eq!(format!("{}", array), "[1, -2, 3]");
                assert_eq!(
                    format!("{:?}", array),
                    concat!(stringify!($array_type), " { values: [1, -2, 3] }")
                );
            }

            #[test]
            fn test_inner() {
                use std::sync::atomic::Ordering;

                let array = <$array_type>::new(2);
                assert_eq!(array.inner().len(), 2);
                array.inner()[1].store(42, Ordering::SeqCst);
                assert_eq!(array.get(1), 42);
            }

            #[test]
            #[should_panic(expected = "index out of bounds: the len is 3 but the index is 3")]
            fn test_get_out_of_bounds() {
                let array = <$array_type>::new(3);
                array.get(3);
            }

            #[test]
            #[should_panic(expected = "index out of bounds")]
            fn test_set_out_of_bounds() {
                let array = <$array_type>::new(0);
                array.set(0, 1);
            }

            #[test]
            #[should_panic(expected = "index out of bounds")]
            fn test_compare_and_swap_out_of_bounds() {
                let array = <$array_type>::new(2);
                array.compare_and_swap(usize::MAX, 0, 1);
            }

            #[test]
            fn test_concurrent_increment_same_index() {
                let array = Arc::new(<$array_type>::new(2));
                let mut handles = vec![];

                for _ in 0..8 {
                    let array = array.clone();
                    handles.push(thread::spawn(move || {
                        for _ in 0..500 {
                            array.increment(1);
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(array.get(0), 0);
                assert_eq!(array.get(1), 4000);
            }
        }
    };
}
