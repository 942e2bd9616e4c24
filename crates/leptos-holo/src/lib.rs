//! Leptos Holo Tilt
//!
//! Pointer-driven 3D tilt and glare for card elements, using mouse events.
//! The pointer position is reduced to a [`TiltFrame`] held in a signal; the
//! card renders it as CSS custom properties:
//! `--rx --ry` (rotation), `--mx --my --posx --posy` (glare center),
//! `--hyp` (distance from center) and `--o` (overlay opacity).
//!
//! Handlers are meant to be attached with `on:` bindings in `view!`, so they
//! are released together with the element.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Rotation at the card edges, in degrees
pub const MAX_ROTATION_DEG: f64 = 15.0;

/// Element measured for the glare position when present inside the card
pub const GLARE_SELECTOR: &str = ".holo-card-image-container";

/// Overlay opacity on touch-only devices
const TOUCH_OPACITY: f64 = 0.3;

/// Fixed rainbow palette of the holo overlay
const PALETTE: &[(&str, &str)] = &[
    ("--red", "#f80e7b"),
    ("--yel", "#eedf10"),
    ("--gre", "#21e985"),
    ("--blu", "#0dbde9"),
    ("--vio", "#c929f1"),
];

/// Axis-aligned box in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Transform parameters derived from one pointer position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Percent of the glare area width
    pub glare_x: f64,
    /// Percent of the glare area height
    pub glare_y: f64,
    pub hyp: f64,
    pub opacity: f64,
}

impl TiltFrame {
    pub const REST: TiltFrame = TiltFrame {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glare_x: 50.0,
        glare_y: 50.0,
        hyp: 0.0,
        opacity: 0.0,
    };

    /// Rest pose with the overlay visible
    pub fn lit() -> Self {
        Self { opacity: 1.0, ..Self::REST }
    }

    /// Map a pointer position to rotation and glare.
    /// Without a glare area the glare stays centered.
    pub fn from_pointer(card: Rect, glare_area: Option<Rect>, x: f64, y: f64) -> Self {
        if card.is_degenerate() {
            return Self::lit();
        }

        // -1..1 on both axes, y pointing up
        let mouse_x = ((x - card.left) / card.width - 0.5) * 2.0;
        let mouse_y = ((y - card.top) / card.height - 0.5) * -2.0;

        let (glare_x, glare_y) = match glare_area.filter(|r| !r.is_degenerate()) {
            Some(area) => (
                (x - area.left) / area.width * 100.0,
                (y - area.top) / area.height * 100.0,
            ),
            None => (50.0, 50.0),
        };

        Self {
            rotate_x: mouse_y * MAX_ROTATION_DEG,
            rotate_y: mouse_x * MAX_ROTATION_DEG,
            glare_x,
            glare_y,
            hyp: (mouse_x * mouse_x + mouse_y * mouse_y).sqrt(),
            opacity: 1.0,
        }
    }

    /// CSS custom properties for this frame
    pub fn css_vars(&self) -> String {
        format!(
            "--rx: {:.2}deg; --ry: {:.2}deg; --mx: {:.2}%; --my: {:.2}%; --posx: {:.2}%; --posy: {:.2}%; --hyp: {:.3}; --o: {};",
            self.rotate_x,
            self.rotate_y,
            self.glare_x,
            self.glare_y,
            self.glare_x,
            self.glare_y,
            self.hyp,
            self.opacity,
        )
    }
}

/// Static custom properties: scale, palette and glow color
pub fn base_vars(glow: &str) -> String {
    let mut vars = String::from("--s: 1;");
    for (name, value) in PALETTE {
        vars.push_str(&format!(" {}: {};", name, value));
    }
    vars.push_str(&format!(" --glow: {};", glow));
    vars
}

// ========================
// Capability + State Machine
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerCapability {
    /// Mouse or pen: hover tracking available
    Fine,
    TouchOnly,
}

/// `"ontouchstart" in window || navigator.maxTouchPoints > 0`
pub fn detect_pointer_capability() -> PointerCapability {
    let Some(win) = web_sys::window() else {
        return PointerCapability::Fine;
    };
    let has_touch_start = js_sys::Reflect::has(&win, &"ontouchstart".into()).unwrap_or(false);
    let touch_points = win.navigator().max_touch_points();
    if has_touch_start || touch_points > 0 {
        PointerCapability::TouchOnly
    } else {
        PointerCapability::Fine
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Enter,
    Move(TiltFrame),
    Leave,
}

/// Card interaction state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoloPhase {
    /// Touch-only device: fixed dim overlay, pointer input ignored
    Static,
    Resting,
    Interacting(TiltFrame),
}

impl HoloPhase {
    pub fn initial(capability: PointerCapability) -> Self {
        match capability {
            PointerCapability::Fine => HoloPhase::Resting,
            PointerCapability::TouchOnly => HoloPhase::Static,
        }
    }

    pub fn next(self, input: PointerInput) -> Self {
        match (self, input) {
            (HoloPhase::Static, _) => HoloPhase::Static,
            (_, PointerInput::Leave) => HoloPhase::Resting,
            (HoloPhase::Resting, PointerInput::Enter) => HoloPhase::Interacting(TiltFrame::lit()),
            (HoloPhase::Interacting(frame), PointerInput::Enter) => HoloPhase::Interacting(frame),
            (_, PointerInput::Move(frame)) => HoloPhase::Interacting(frame),
        }
    }

    pub fn frame(&self) -> TiltFrame {
        match self {
            HoloPhase::Static => TiltFrame {
                opacity: TOUCH_OPACITY,
                ..TiltFrame::REST
            },
            HoloPhase::Resting => TiltFrame::REST,
            HoloPhase::Interacting(frame) => *frame,
        }
    }

    pub fn is_interacting(&self) -> bool {
        matches!(self, HoloPhase::Interacting(_))
    }
}

// ========================
// Reactive Binding
// ========================

/// Holo state signals for one card
#[derive(Clone, Copy)]
pub struct HoloSignals {
    pub phase_read: ReadSignal<HoloPhase>,
    pub phase_write: WriteSignal<HoloPhase>,
}

pub fn create_holo_signals(capability: PointerCapability) -> HoloSignals {
    let (phase_read, phase_write) = signal(HoloPhase::initial(capability));
    HoloSignals { phase_read, phase_write }
}

impl HoloSignals {
    fn apply(&self, input: PointerInput) {
        self.phase_write.update(|phase| *phase = phase.next(input));
    }

    /// Reactive inline style: static vars followed by the current frame
    pub fn style(&self, glow: &str) -> String {
        format!("{} {}", base_vars(glow), self.phase_read.get().frame().css_vars())
    }

    pub fn is_interacting(&self) -> bool {
        self.phase_read.get().is_interacting()
    }

    fn is_static(&self) -> bool {
        self.phase_read.get_untracked() == HoloPhase::Static
    }
}

/// Measure the card (event's current target) and its glare area
fn frame_from_event(ev: &web_sys::MouseEvent) -> Option<TiltFrame> {
    let card = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let card_rect = Rect::from_dom(&card.get_bounding_client_rect());
    let glare_rect = card
        .query_selector(GLARE_SELECTOR)
        .ok()
        .flatten()
        .map(|el| Rect::from_dom(&el.get_bounding_client_rect()));
    Some(TiltFrame::from_pointer(
        card_rect,
        glare_rect,
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
    ))
}

pub fn make_on_mouseenter(holo: HoloSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if !holo.is_static() {
            holo.apply(PointerInput::Enter);
        }
    }
}

pub fn make_on_mousemove(holo: HoloSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if holo.is_static() {
            return;
        }
        if let Some(frame) = frame_from_event(&ev) {
            holo.apply(PointerInput::Move(frame));
        }
    }
}

pub fn make_on_mouseleave(holo: HoloSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if !holo.is_static() {
            holo.apply(PointerInput::Leave);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 300.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_center_has_no_rotation() {
        let frame = TiltFrame::from_pointer(CARD, None, 200.0, 200.0);
        assert!(close(frame.rotate_x, 0.0));
        assert!(close(frame.rotate_y, 0.0));
        assert!(close(frame.glare_x, 50.0));
        assert!(close(frame.glare_y, 50.0));
        assert!(close(frame.hyp, 0.0));
        assert!(close(frame.opacity, 1.0));
    }

    #[test]
    fn test_top_left_corner() {
        let frame = TiltFrame::from_pointer(CARD, None, 100.0, 50.0);
        assert!(close(frame.rotate_y, -MAX_ROTATION_DEG));
        assert!(close(frame.rotate_x, MAX_ROTATION_DEG));
        assert!(close(frame.hyp, 2f64.sqrt()));

        let with_image = TiltFrame::from_pointer(CARD, Some(CARD), 100.0, 50.0);
        assert!(close(with_image.glare_x, 0.0));
        assert!(close(with_image.glare_y, 0.0));
    }

    #[test]
    fn test_glare_centered_without_image_area() {
        let frame = TiltFrame::from_pointer(CARD, None, 110.0, 340.0);
        assert!(close(frame.glare_x, 50.0));
        assert!(close(frame.glare_y, 50.0));
        assert!(!close(frame.rotate_x, 0.0));

        let flat = Rect::new(120.0, 70.0, 0.0, 100.0);
        let frame = TiltFrame::from_pointer(CARD, Some(flat), 110.0, 340.0);
        assert!(close(frame.glare_x, 50.0));
        assert!(close(frame.glare_y, 50.0));
    }

    #[test]
    fn test_glare_uses_image_area() {
        let image = Rect::new(120.0, 70.0, 160.0, 100.0);
        let frame = TiltFrame::from_pointer(CARD, Some(image), 200.0, 120.0);
        assert!(close(frame.glare_x, 50.0));
        assert!(close(frame.glare_y, 50.0));
        // rotation still follows the whole card
        assert!(close(frame.rotate_y, 0.0));
    }

    #[test]
    fn test_degenerate_card() {
        let frame = TiltFrame::from_pointer(Rect::new(0.0, 0.0, 0.0, 0.0), None, 5.0, 5.0);
        assert_eq!(frame, TiltFrame::lit());
    }

    #[test]
    fn test_phase_transitions() {
        let moved = TiltFrame::from_pointer(CARD, None, 150.0, 100.0);

        let phase = HoloPhase::initial(PointerCapability::Fine);
        assert_eq!(phase, HoloPhase::Resting);

        let phase = phase.next(PointerInput::Enter);
        assert_eq!(phase, HoloPhase::Interacting(TiltFrame::lit()));

        let phase = phase.next(PointerInput::Move(moved));
        assert_eq!(phase.frame(), moved);

        // a late enter does not reset the current frame
        assert_eq!(phase.next(PointerInput::Enter).frame(), moved);

        let phase = phase.next(PointerInput::Leave);
        assert_eq!(phase, HoloPhase::Resting);
        assert_eq!(phase.frame(), TiltFrame::REST);
    }

    #[test]
    fn test_static_phase_ignores_pointer() {
        let phase = HoloPhase::initial(PointerCapability::TouchOnly);
        let moved = TiltFrame::from_pointer(CARD, None, 150.0, 100.0);
        for input in [PointerInput::Enter, PointerInput::Move(moved), PointerInput::Leave] {
            assert_eq!(phase.next(input), HoloPhase::Static);
        }
        assert!(close(phase.frame().opacity, TOUCH_OPACITY));
    }

    #[test]
    fn test_css_vars() {
        assert_eq!(
            TiltFrame::REST.css_vars(),
            "--rx: 0.00deg; --ry: 0.00deg; --mx: 50.00%; --my: 50.00%; --posx: 50.00%; --posy: 50.00%; --hyp: 0.000; --o: 0;"
        );
        let vars = base_vars("#EE8130");
        assert!(vars.starts_with("--s: 1;"));
        assert!(vars.contains("--vio: #c929f1;"));
        assert!(vars.ends_with("--glow: #EE8130;"));
    }
}
