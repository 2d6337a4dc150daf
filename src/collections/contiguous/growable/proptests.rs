#![cfg(test)]

use proptest::prelude::*;

use super::*;

// Generate arbitrary sequences of operations, apply them to both a Vec and a GrowableArray and check
// that the logical contents agree after every step.
#[derive(Debug, Clone)]
enum Action {
    Append(i64),
    Set(usize, i64),
    RemoveAt(usize),
    Resize(usize),
    Get(usize),
}

impl Action {
    fn act_on_vector(self, vec: &mut Vec<i64>, cap: &mut usize) {
        match self {
            Action::Append(value) => {
                if vec.len() == *cap {
                    *cap = *cap * 2 + 1;
                }
                vec.push(value);
            }
            Action::Set(index, value) => {
                if let Some(slot) = vec.get_mut(index) {
                    *slot = value;
                }
            }
            Action::RemoveAt(index) => {
                if index < vec.len() {
                    vec.remove(index);
                }
            }
            Action::Resize(new_cap) => {
                vec.truncate(new_cap);
                *cap = new_cap;
            }
            Action::Get(_) => {}
        }
    }

    fn act_on_array(self, arr: &mut GrowableArray<i64>, vec: &[i64]) {
        match self {
            Action::Append(value) => {
                assert!(arr.append(value).is_ok());
            }
            Action::Set(index, value) => {
                assert_eq!(arr.set(index, value).is_ok(), index < vec.len());
            }
            Action::RemoveAt(index) => {
                assert_eq!(arr.remove_at(index).ok(), vec.get(index).copied());
            }
            Action::Resize(new_cap) => {
                assert!(arr.resize(new_cap).is_ok());
            }
            Action::Get(index) => {
                assert_eq!(arr.get(index, i64::MIN), vec.get(index).copied().unwrap_or(i64::MIN));
            }
        }
    }
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => any::<i64>().prop_map(Action::Append),
        1 => (0..40usize, any::<i64>()).prop_map(|(index, value)| Action::Set(index, value)),
        1 => (0..40usize).prop_map(Action::RemoveAt),
        1 => (0..40usize).prop_map(Action::Resize),
        1 => (0..40usize).prop_map(Action::Get),
    ]
}

fn actions_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action_strategy(), 0..100)
}

fn assert_matches(arr: &GrowableArray<i64>, vec: &[i64], cap: usize) {
    arr.assert_invariants();
    assert_eq!(arr.len(), vec.len());
    assert_eq!(arr.cap(), cap);
    for (index, value) in vec.iter().enumerate() {
        assert_eq!(arr.get_ref(index), Some(value));
    }
    assert_eq!(arr.get_ref(vec.len()), None);
}

proptest! {
    #[test]
    fn operations_in_order_match(initial_cap in 0..20usize, actions in actions_strategy()) {
        let mut arr = GrowableArray::with_cap(initial_cap);
        let mut vec = Vec::new();
        let mut cap = initial_cap;

        for action in actions {
            // The array checks its results against the model before the model is updated.
            action.clone().act_on_array(&mut arr, &vec);
            action.act_on_vector(&mut vec, &mut cap);
            assert_matches(&arr, &vec, cap);
        }
    }

    #[test]
    fn appended_values_are_read_back_in_order(
        initial_cap in 0..16usize,
        values in prop::collection::vec(any::<i32>(), 0..256),
    ) {
        let mut arr = GrowableArray::with_cap(initial_cap);
        for value in values.iter() {
            arr.push(*value);
        }

        prop_assert_eq!(arr.len(), values.len());
        prop_assert!(arr.cap() >= values.len());
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(arr.get(index, 0), *value);
        }
    }

    #[test]
    fn out_of_range_reads_return_the_default(
        len in 0..32usize,
        extra in 0..64usize,
        default in any::<u16>(),
    ) {
        let arr: GrowableArray<u16> = (0..len as u16).collect();
        let cap = arr.cap();

        prop_assert_eq!(arr.get(len + extra, default), default);
        prop_assert_eq!((arr.len(), arr.cap()), (len, cap));
    }

    #[test]
    fn remove_at_shifts_later_elements(
        values in prop::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
    ) {
        let index = index.index(values.len());
        let mut arr: GrowableArray<u8> = values.iter().copied().collect();

        prop_assert_eq!(arr.remove_at(index), Ok(values[index]));
        prop_assert_eq!(arr.len(), values.len() - 1);
        for j in 0..index {
            prop_assert_eq!(arr.get(j, 0), values[j]);
        }
        for j in index..arr.len() {
            prop_assert_eq!(arr.get(j, 0), values[j + 1]);
        }
    }

    #[test]
    fn resize_truncates_or_preserves(
        values in prop::collection::vec(any::<u8>(), 0..64),
        new_cap in 0..128usize,
    ) {
        let mut arr: GrowableArray<u8> = values.iter().copied().collect();
        prop_assert!(arr.resize(new_cap).is_ok());

        let kept = values.len().min(new_cap);
        prop_assert_eq!((arr.len(), arr.cap()), (kept, new_cap));
        for (index, value) in values[..kept].iter().enumerate() {
            prop_assert_eq!(arr.get(index, 0), *value);
        }
    }
}
