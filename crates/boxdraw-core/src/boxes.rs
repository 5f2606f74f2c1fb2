// Author: Dustin Pilgrim
// License: MIT

use crate::point::Point;
use crate::rect::RectF;

/// A user-drawn box: a fixed origin and the corner being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBox {
    origin: Point,
    pub current: Point,
}

impl DragBox {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
        }
    }

    /// Rebuilds a box from both corners (used by state restore).
    pub fn with_current(origin: Point, current: Point) -> Self {
        Self { origin, current }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn rect(&self) -> RectF {
        RectF::from_corners(self.origin, self.current)
    }
}

/// Ordered box list; insertion order is draw order.
#[derive(Debug, Clone, Default)]
pub struct BoxStore {
    boxes: Vec<DragBox>,
    // index into `boxes` of the box still following the pointer
    active: Option<usize>,
}

impl BoxStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, point: Point) {
        self.boxes.push(DragBox::new(point));
        self.active = Some(self.boxes.len() - 1);
    }

    /// Moves the active box's dragged corner. Returns false when no gesture
    /// is in progress.
    pub fn update(&mut self, point: Point) -> bool {
        match self.active.and_then(|i| self.boxes.get_mut(i)) {
            Some(b) => {
                b.current = point;
                true
            }
            None => false,
        }
    }

    pub fn end(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&DragBox> {
        self.active.and_then(|i| self.boxes.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DragBox> {
        self.boxes.iter()
    }

    pub fn as_slice(&self) -> &[DragBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Swaps in a restored box list. Any gesture in progress is dropped.
    pub fn replace_all(&mut self, boxes: Vec<DragBox>) {
        self.boxes = boxes;
        self.active = None;
    }
}

impl<'a> IntoIterator for &'a BoxStore {
    type Item = &'a DragBox;
    type IntoIter = std::slice::Iter<'a, DragBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn begin_without_update_is_degenerate() {
        let mut store = BoxStore::new();
        store.begin(p(4.0, 9.0));

        let b = store.active().copied().unwrap();
        assert_eq!(b.origin(), p(4.0, 9.0));
        assert_eq!(b.current, p(4.0, 9.0));
        assert!(b.rect().is_empty());
    }

    #[test]
    fn update_moves_only_the_active_box() {
        let mut store = BoxStore::new();
        store.begin(p(0.0, 0.0));
        store.update(p(5.0, 5.0));
        store.end();
        store.begin(p(10.0, 10.0));
        assert!(store.update(p(20.0, 30.0)));

        let boxes = store.as_slice();
        assert_eq!(boxes[0].current, p(5.0, 5.0));
        assert_eq!(boxes[1].origin(), p(10.0, 10.0));
        assert_eq!(boxes[1].current, p(20.0, 30.0));
    }

    #[test]
    fn update_after_end_is_a_no_op() {
        let mut store = BoxStore::new();
        store.begin(p(1.0, 1.0));
        store.update(p(2.0, 2.0));
        store.end();

        let before = store.as_slice().to_vec();
        assert!(!store.update(p(99.0, 99.0)));
        assert_eq!(store.as_slice(), before.as_slice());
        assert!(store.active().is_none());
    }

    #[test]
    fn update_on_empty_store_is_a_no_op() {
        let mut store = BoxStore::new();
        assert!(!store.update(p(1.0, 1.0)));
        assert!(store.is_empty());
    }

    #[test]
    fn end_keeps_the_box() {
        let mut store = BoxStore::new();
        store.begin(p(1.0, 1.0));
        store.end();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn iteration_is_in_insertion_order_and_restartable() {
        let mut store = BoxStore::new();
        for i in 0..3 {
            store.begin(p(i as f32, 0.0));
            store.end();
        }

        let first: Vec<f32> = store.iter().map(|b| b.origin().x).collect();
        let second: Vec<f32> = (&store).into_iter().map(|b| b.origin().x).collect();
        assert_eq!(first, vec![0.0, 1.0, 2.0]);
        assert_eq!(first, second);
    }

    #[test]
    fn replace_all_clears_active_gesture() {
        let mut store = BoxStore::new();
        store.begin(p(1.0, 1.0));
        store.replace_all(vec![DragBox::with_current(p(0.0, 0.0), p(3.0, 3.0))]);

        assert!(store.active().is_none());
        assert!(!store.update(p(8.0, 8.0)));
        assert_eq!(store.as_slice()[0].current, p(3.0, 3.0));
    }
}
