//! # Mode Transitions
//!
//! Computes which surface operations move the host from its current
//! attachment to the one the mode requires. The plan is minimal (nothing
//! already in place is touched) and always lists detaches first, so the
//! two surfaces are never attached together even between operations.

use tracing::trace;

use crate::host::{HostTree, Surface};
use crate::mode::Mode;

/// Which surfaces are currently children of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attachment {
    pub editable: bool,
    pub display: bool,
}

impl Attachment {
    pub fn of<H: HostTree + ?Sized>(host: &H) -> Self {
        Self {
            editable: host.contains(Surface::Editable),
            display: host.contains(Surface::Display),
        }
    }

    pub fn contains(self, surface: Surface) -> bool {
        match surface {
            Surface::Editable => self.editable,
            Surface::Display => self.display,
        }
    }

    /// The single attached surface, if exactly one is attached
    pub fn exclusive(self) -> Option<Surface> {
        match (self.editable, self.display) {
            (true, false) => Some(Surface::Editable),
            (false, true) => Some(Surface::Display),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    Detach(Surface),
    WriteDisplay(String),
    Attach(Surface),
}

/// Plan the operations that bring `current` in line with `mode`.
///
/// `release` is the current value of the `release` attribute; in display
/// mode it is written into the display surface right before that surface
/// is attached. An already attached display surface is left alone.
pub fn plan_transition(mode: Mode, current: Attachment, release: Option<&str>) -> Vec<SurfaceOp> {
    let (wanted, unwanted) = match mode {
        Mode::Editing => (Surface::Editable, Surface::Display),
        Mode::Display => (Surface::Display, Surface::Editable),
    };

    let mut ops = Vec::new();
    if current.contains(unwanted) {
        ops.push(SurfaceOp::Detach(unwanted));
    }
    if !current.contains(wanted) {
        if let (Mode::Display, Some(release)) = (mode, release) {
            ops.push(SurfaceOp::WriteDisplay(release.to_string()));
        }
        ops.push(SurfaceOp::Attach(wanted));
    }
    ops
}

/// Apply a plan to the host, in order
pub fn apply_plan<H: HostTree + ?Sized>(host: &mut H, ops: Vec<SurfaceOp>) {
    for op in ops {
        trace!(?op, "Applying surface op");
        match op {
            SurfaceOp::Detach(surface) => host.remove_child(surface),
            SurfaceOp::WriteDisplay(html) => host.set_display_html(&html),
            SurfaceOp::Attach(surface) => host.append_child(surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: Attachment = Attachment {
        editable: false,
        display: false,
    };
    const EDITABLE: Attachment = Attachment {
        editable: true,
        display: false,
    };
    const DISPLAY: Attachment = Attachment {
        editable: false,
        display: true,
    };
    const BOTH: Attachment = Attachment {
        editable: true,
        display: true,
    };

    #[test]
    fn test_initial_editing() {
        assert_eq!(
            plan_transition(Mode::Editing, NONE, Some("<p>x</p>")),
            vec![SurfaceOp::Attach(Surface::Editable)]
        );
    }

    #[test]
    fn test_initial_display_writes_release_first() {
        assert_eq!(
            plan_transition(Mode::Display, NONE, Some("<p>x</p>")),
            vec![
                SurfaceOp::WriteDisplay("<p>x</p>".to_string()),
                SurfaceOp::Attach(Surface::Display),
            ]
        );
        assert_eq!(
            plan_transition(Mode::Display, NONE, None),
            vec![SurfaceOp::Attach(Surface::Display)]
        );
    }

    #[test]
    fn test_switch_detaches_before_attaching() {
        assert_eq!(
            plan_transition(Mode::Editing, DISPLAY, None),
            vec![
                SurfaceOp::Detach(Surface::Display),
                SurfaceOp::Attach(Surface::Editable),
            ]
        );
        assert_eq!(
            plan_transition(Mode::Display, EDITABLE, Some("r")),
            vec![
                SurfaceOp::Detach(Surface::Editable),
                SurfaceOp::WriteDisplay("r".to_string()),
                SurfaceOp::Attach(Surface::Display),
            ]
        );
    }

    #[test]
    fn test_settled_state_is_a_no_op() {
        assert!(plan_transition(Mode::Editing, EDITABLE, Some("r")).is_empty());
        assert!(plan_transition(Mode::Display, DISPLAY, None).is_empty());
        assert!(plan_transition(Mode::Display, DISPLAY, Some("r")).is_empty());
    }

    #[test]
    fn test_repairs_double_attachment() {
        assert_eq!(
            plan_transition(Mode::Editing, BOTH, None),
            vec![SurfaceOp::Detach(Surface::Display)]
        );
    }

    #[test]
    fn test_exclusive() {
        assert_eq!(NONE.exclusive(), None);
        assert_eq!(EDITABLE.exclusive(), Some(Surface::Editable));
        assert_eq!(DISPLAY.exclusive(), Some(Surface::Display));
        assert_eq!(BOTH.exclusive(), None);
    }
}
