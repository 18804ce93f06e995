use proptest::prelude::*;

use super::*;

#[test]
fn test_fold_sizes() {
    let splits = KFold::new(3).split(10).unwrap();
    let sizes: Vec<usize> = splits.iter().map(|(_, test)| test.len()).collect();
    assert_eq!(sizes, vec![4, 3, 3]);
    for (train, test) in &splits {
        assert_eq!(train.len() + test.len(), 10);
    }
}

#[test]
fn test_unshuffled_folds_are_contiguous() {
    let splits = KFold::new(2).with_shuffle(false).split(4).unwrap();
    assert_eq!(splits[0], (vec![2, 3], vec![0, 1]));
    assert_eq!(splits[1], (vec![0, 1], vec![2, 3]));
}

#[test]
fn test_invalid_folds() {
    assert_eq!(
        KFold::new(1).split(10),
        Err(EmulatorError::InvalidFolds {
            n_splits: 1,
            n_samples: 10
        })
    );
    assert_eq!(
        KFold::new(5).split(4),
        Err(EmulatorError::InvalidFolds {
            n_splits: 5,
            n_samples: 4
        })
    );
}

#[test]
fn test_seeded_split_is_reproducible() {
    let kfold = KFold::new(4).with_random_state(Some(7));
    assert_eq!(kfold.split(21).unwrap(), kfold.split(21).unwrap());
}

#[test]
fn test_leave_one_out() {
    let splits = KFold::new(5).split(5).unwrap();
    assert!(splits.iter().all(|(train, test)| test.len() == 1 && train.len() == 4));
}

proptest! {
    #[test]
    fn test_folds_partition_samples(n_samples in 2usize..60, k in 2usize..10, seed in any::<u64>()) {
        prop_assume!(k <= n_samples);
        let splits = KFold::new(k).with_random_state(Some(seed)).split(n_samples).unwrap();
        prop_assert_eq!(splits.len(), k);

        let mut seen = vec![0usize; n_samples];
        for (train, test) in &splits {
            prop_assert!(!test.is_empty());
            for &i in test {
                seen[i] += 1;
                prop_assert!(!train.contains(&i));
            }
            prop_assert_eq!(train.len() + test.len(), n_samples);
        }
        prop_assert!(seen.iter().all(|&c| c == 1));
    }
}
