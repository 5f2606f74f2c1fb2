// Author: Dustin Pilgrim
// License: MIT

use boxdraw_core::{BoxStore, Canvas, MotionAction, MotionEvent, Paints, render};
use boxdraw_state::{
    Bundle, PARENT_STATE_KEY, Parcel, StateError, Value, restore_boxes, save_boxes,
};

use crate::surface::ParentState;

/// Drag-to-draw view: every press starts a new box, moves stretch it,
/// release or cancel finishes it.
#[derive(Debug)]
pub struct BoxDrawingView<P> {
    parent: P,
    boxes: BoxStore,
    paints: Paints,
    invalidated: bool,
}

impl<P: ParentState> BoxDrawingView<P> {
    pub fn new(parent: P, paints: Paints) -> Self {
        Self {
            parent,
            boxes: BoxStore::new(),
            paints,
            invalidated: false,
        }
    }

    pub fn boxes(&self) -> &BoxStore {
        &self.boxes
    }

    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub fn parent_mut(&mut self) -> &mut P {
        &mut self.parent
    }

    /// Always consumes the event.
    pub fn on_touch_event(&mut self, event: MotionEvent) -> bool {
        let point = event.position();

        match event.action {
            MotionAction::Down => self.boxes.begin(point),
            MotionAction::Move => {
                if self.boxes.update(point) {
                    self.invalidate();
                }
            }
            MotionAction::Up | MotionAction::Cancel => self.boxes.end(),
        }

        eventline::info!("{} at x={}, y={}", event.action.label(), point.x, point.y);

        true
    }

    pub fn on_draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render(&self.boxes, canvas, self.paints);
    }

    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }

    pub fn on_save_instance_state(&self) -> Parcel {
        let mut bundle = Bundle::new();
        bundle.put_parcel(PARENT_STATE_KEY, self.parent.save_state());
        save_boxes(&self.boxes, &mut bundle);
        Parcel::Bundle(bundle)
    }

    /// Anything other than a bundle is not ours and goes straight to the
    /// parent. A bundle that fails to decode leaves the view untouched.
    pub fn on_restore_instance_state(&mut self, state: Parcel) -> Result<(), StateError> {
        let mut bundle = match state {
            Parcel::Bundle(bundle) => bundle,
            other => {
                eventline::debug!("restore: not a bundle, passing to parent");
                self.parent.restore_state(other);
                return Ok(());
            }
        };

        let restored = restore_boxes(&bundle)?;

        let parent_state = match bundle.remove(PARENT_STATE_KEY) {
            Some(Value::Parcel(p)) => *p,
            _ => Parcel::Empty,
        };
        self.parent.restore_state(parent_state);

        eventline::debug!("restore: {} boxes", restored.len());
        self.boxes.replace_all(restored);
        self.invalidate();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use boxdraw_core::{BACKGROUND_ARGB, DrawCommand, Point, RecordingCanvas, RectF};

    use super::*;

    /// Parent that remembers what it was handed.
    #[derive(Debug, Default)]
    struct Recorder {
        saved: Vec<u8>,
        restored: Vec<Parcel>,
    }

    impl ParentState for Recorder {
        fn save_state(&self) -> Parcel {
            Parcel::Raw(self.saved.clone())
        }

        fn restore_state(&mut self, state: Parcel) {
            self.restored.push(state);
        }
    }

    fn view() -> BoxDrawingView<Recorder> {
        BoxDrawingView::new(Recorder::default(), Paints::default())
    }

    #[test]
    fn drag_draws_a_normalized_box() {
        let mut v = view();
        assert!(v.on_touch_event(MotionEvent::down(10.0, 10.0)));
        v.on_touch_event(MotionEvent::moved(50.0, 5.0));
        v.on_touch_event(MotionEvent::up(50.0, 5.0));

        let mut canvas = RecordingCanvas::new();
        v.on_draw(&mut canvas);

        assert_eq!(canvas.commands[0], DrawCommand::Paint { argb: BACKGROUND_ARGB });
        assert_eq!(
            canvas.rects().collect::<Vec<_>>(),
            vec![RectF {
                left: 10.0,
                top: 5.0,
                right: 50.0,
                bottom: 10.0
            }]
        );
    }

    #[test]
    fn only_moves_with_an_active_box_request_redraw() {
        let mut v = view();
        v.on_touch_event(MotionEvent::moved(1.0, 1.0));
        assert!(!v.take_invalidated());

        v.on_touch_event(MotionEvent::down(0.0, 0.0));
        assert!(!v.take_invalidated());

        v.on_touch_event(MotionEvent::moved(3.0, 3.0));
        assert!(v.take_invalidated());
        assert!(!v.take_invalidated());
    }

    #[test]
    fn move_after_cancel_changes_nothing() {
        let mut v = view();
        v.on_touch_event(MotionEvent::down(0.0, 0.0));
        v.on_touch_event(MotionEvent::moved(4.0, 4.0));
        v.on_touch_event(MotionEvent::cancel(4.0, 4.0));
        v.on_touch_event(MotionEvent::moved(9.0, 9.0));

        assert_eq!(v.boxes().len(), 1);
        assert_eq!(v.boxes().as_slice()[0].current, Point::new(4.0, 4.0));
    }

    #[test]
    fn save_then_restore_round_trips_boxes_and_parent_state() {
        let mut v = view();
        v.parent_mut().saved = vec![42];
        for (o, c) in [((10.0, 10.0), (50.0, 5.0)), ((0.0, 0.0), (-5.0, 8.0))] {
            v.on_touch_event(MotionEvent::down(o.0, o.1));
            v.on_touch_event(MotionEvent::moved(c.0, c.1));
            v.on_touch_event(MotionEvent::up(c.0, c.1));
        }

        let parcel = v.on_save_instance_state();

        let mut fresh = view();
        fresh.on_restore_instance_state(parcel).unwrap();

        assert_eq!(fresh.boxes().as_slice(), v.boxes().as_slice());
        assert_eq!(fresh.parent().restored, vec![Parcel::Raw(vec![42])]);
        assert!(fresh.boxes().active().is_none());
        assert!(fresh.take_invalidated());
    }

    #[test]
    fn saved_bundle_uses_positional_keys() {
        let mut v = view();
        v.on_touch_event(MotionEvent::down(10.0, 10.0));
        v.on_touch_event(MotionEvent::moved(50.0, 5.0));
        v.on_touch_event(MotionEvent::up(50.0, 5.0));

        let parcel = v.on_save_instance_state();
        let bundle = parcel.as_bundle().unwrap();
        assert_eq!(
            bundle.get_float_array("box1"),
            Some(&[10.0, 10.0, 50.0, 5.0][..])
        );
        assert!(bundle.get_parcel(PARENT_STATE_KEY).is_some());
    }

    #[test]
    fn non_bundle_state_goes_to_parent_untouched() {
        let mut v = view();
        v.on_touch_event(MotionEvent::down(1.0, 1.0));

        v.on_restore_instance_state(Parcel::Raw(vec![1, 2, 3])).unwrap();

        assert_eq!(v.boxes().len(), 1);
        assert_eq!(v.parent().restored, vec![Parcel::Raw(vec![1, 2, 3])]);
    }

    #[test]
    fn bad_bundle_leaves_view_unchanged() {
        let mut v = view();
        v.on_touch_event(MotionEvent::down(1.0, 1.0));

        let mut bundle = Bundle::new();
        bundle.put_float_array("box1", vec![1.0]);
        let err = v.on_restore_instance_state(Parcel::Bundle(bundle));

        assert!(matches!(err, Err(StateError::MalformedBox { .. })));
        assert_eq!(v.boxes().len(), 1);
        assert!(v.parent().restored.is_empty());
    }

    #[test]
    fn restore_replaces_existing_boxes() {
        let mut src = view();
        src.on_touch_event(MotionEvent::down(5.0, 5.0));
        let parcel = src.on_save_instance_state();

        let mut v = view();
        v.on_touch_event(MotionEvent::down(1.0, 1.0));
        v.on_touch_event(MotionEvent::down(2.0, 2.0));
        v.on_restore_instance_state(parcel).unwrap();

        assert_eq!(v.boxes().len(), 1);
        assert_eq!(v.boxes().as_slice()[0].origin(), Point::new(5.0, 5.0));
    }

    #[test]
    fn bundle_without_parent_slot_restores_empty_parent() {
        let mut bundle = Bundle::new();
        bundle.put_float_array("box1", vec![0.0, 0.0, 1.0, 1.0]);

        let mut v = view();
        v.on_restore_instance_state(Parcel::Bundle(bundle)).unwrap();

        assert_eq!(v.boxes().len(), 1);
        assert_eq!(v.parent().restored, vec![Parcel::Empty]);
    }
}
