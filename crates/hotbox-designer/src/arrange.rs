//! Z-order rearrangement of document shapes. Shapes are painted in
//! document order, so "front" means the end of the list.

/// Move every selected element one slot toward the end. A selected run
/// moves as a block and stops at the end of the list.
pub fn move_up_elements<T>(elements: &mut [T], selected: impl Fn(&T) -> bool) {
    if elements.len() < 2 {
        return;
    }
    for index in (0..elements.len() - 1).rev() {
        if selected(&elements[index]) && !selected(&elements[index + 1]) {
            elements.swap(index, index + 1);
        }
    }
}

/// Move every selected element one slot toward the beginning.
pub fn move_down_elements<T>(elements: &mut [T], selected: impl Fn(&T) -> bool) {
    for index in 1..elements.len() {
        if selected(&elements[index]) && !selected(&elements[index - 1]) {
            elements.swap(index, index - 1);
        }
    }
}

/// Move the selected elements to the end of the list, keeping their
/// relative order.
pub fn move_elements_to_end<T>(elements: Vec<T>, selected: impl Fn(&T) -> bool) -> Vec<T> {
    let (picked, mut rest): (Vec<T>, Vec<T>) = elements.into_iter().partition(&selected);
    rest.extend(picked);
    rest
}

/// Move the selected elements to the beginning of the list, keeping
/// their relative order.
pub fn move_elements_to_begin<T>(elements: Vec<T>, selected: impl Fn(&T) -> bool) -> Vec<T> {
    let (mut picked, rest): (Vec<T>, Vec<T>) = elements.into_iter().partition(&selected);
    picked.extend(rest);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_up_shifts_block() {
        let mut values = vec![1, 2, 3, 4];
        move_up_elements(&mut values, |v| *v == 1 || *v == 2);
        assert_eq!(values, vec![3, 1, 2, 4]);
    }

    #[test]
    fn move_up_stops_at_end() {
        let mut values = vec![1, 2];
        move_up_elements(&mut values, |v| *v == 2);
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn move_down_shifts_block() {
        let mut values = vec![1, 2, 3, 4];
        move_down_elements(&mut values, |v| *v == 3 || *v == 4);
        assert_eq!(values, vec![1, 3, 4, 2]);
    }

    #[test]
    fn to_end_keeps_relative_order() {
        let values = vec![1, 2, 3, 4, 5];
        let values = move_elements_to_end(values, |v| *v % 2 == 1);
        assert_eq!(values, vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn to_begin_keeps_relative_order() {
        let values = vec![1, 2, 3, 4, 5];
        let values = move_elements_to_begin(values, |v| *v % 2 == 0);
        assert_eq!(values, vec![2, 4, 1, 3, 5]);
    }
}
