//! Leptos DragDrop Utilities
//! 
//! Mouse-driven dragging of items onto container targets (lists, columns).
//! Uses movement threshold to distinguish click from drag, and only lets a
//! drag begin from an element marked as the item's handle.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Keys usable as item / target ids inside signals
pub trait DndKey: Copy + PartialEq + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Send + Sync + 'static> DndKey for T {}

/// DnD state signals
///
/// `I` identifies a draggable item, `T` a drop target.
#[derive(Clone, Copy)]
pub struct DndSignals<I: DndKey, T: DndKey> {
    pub dragging_id_read: ReadSignal<Option<I>>,
    pub dragging_id_write: WriteSignal<Option<I>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown on a handle but not yet dragging)
    pub pending_id_read: ReadSignal<Option<I>>,
    pub pending_id_write: WriteSignal<Option<I>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Current pointer position while dragging, for the helper label
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    threshold_px: i32,
}

pub fn create_dnd_signals<I: DndKey, T: DndKey>(threshold_px: i32) -> DndSignals<I, T> {
    let (dragging_id_read, dragging_id_write) = signal(None::<I>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<I>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_read,
        pointer_write,
        threshold_px: threshold_px.max(0),
    }
}

impl<I: DndKey, T: DndKey> DndSignals<I, T> {
    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }

    /// Whether a drag finished within the last moment; lets click handlers
    /// ignore the click that ends a drag.
    pub fn just_dragged(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }

    pub fn is_drop_target(&self, target: T) -> bool {
        self.dragging_id_read.get().is_some() && self.drop_target_read.get() == Some(target)
    }
}

/// End drag operation
pub fn end_drag<I: DndKey, T: DndKey>(dnd: &DndSignals<I, T>) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);
    
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Whether the event started on an element carrying `handle_class`
/// (or inside one).
fn started_on_handle(ev: &web_sys::MouseEvent, handle_class: &str) -> bool {
    let Some(target) = ev.target() else { return false };
    let Some(el) = target.dyn_ref::<web_sys::Element>() else { return false };
    el.closest(&format!(".{}", handle_class)).ok().flatten().is_some()
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position, only when pressed on the handle
pub fn make_on_handle_mousedown<I: DndKey, T: DndKey>(
    dnd: DndSignals<I, T>,
    item_id: I,
    handle_class: &'static str,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input, button or link
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
            }
            if !started_on_handle(&ev, handle_class) { return; }
            // Keep text selection from kicking in while dragging
            ev.prevent_default();
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove handler on the document - starts drag if moved enough
///
/// `on_start` runs once per drag, when the threshold is crossed.
pub fn bind_global_mousemove<I, T, S>(dnd: DndSignals<I, T>, on_start: S)
where
    I: DndKey,
    T: DndKey,
    S: Fn(I) + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.pointer_write.set((ev.client_x(), ev.client_y()));
            return;
        }

        // If we have a pending drag and haven't started dragging yet
        if let Some(pending) = pending {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();
            
            // Start dragging if moved beyond threshold
            if dx > dnd.threshold_px || dy > dnd.threshold_px {
                dnd.pointer_write.set((ev.client_x(), ev.client_y()));
                dnd.dragging_id_write.set(Some(pending));
                on_start(pending);
            }
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<I: DndKey, T: DndKey>(
    dnd: DndSignals<I, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_target_mouseleave<I: DndKey, T: DndKey>(
    dnd: DndSignals<I, T>,
    target: T,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        // Entering a nested target fires its mouseenter first; only clear our own.
        if dnd.drop_target_read.get_untracked() == Some(target) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document-level handlers for a drag lifecycle
///
/// `on_start` runs when a pending mousedown becomes a drag; `on_drop` runs
/// on mouseup over a target, `on_cancel` when released anywhere else.
pub fn bind_global_mouseup<I, T, S, D, C>(dnd: DndSignals<I, T>, on_start: S, on_drop: D, on_cancel: C)
where
    I: DndKey,
    T: DndKey,
    S: Fn(I) + 'static,
    D: Fn(I, T) + 'static,
    C: Fn(I) + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        
        // Clear pending state first
        dnd.pending_id_write.set(None);
        
        match (dragging_id, drop_target) {
            (Some(dragged), Some(target)) => {
                end_drag(&dnd);
                on_drop(dragged, target);
            }
            (Some(dragged), None) => {
                // Released outside any target: revert
                end_drag(&dnd);
                on_cancel(dragged);
            }
            // Not dragging - click event will fire naturally on the element
            (None, _) => {}
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    
    // Also bind global mousemove
    bind_global_mousemove(dnd, on_start);
}
