// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity inspection: double-click, pick, show properties
//!
//! `Idle -> Picking -> Displaying -> Idle`. Every pick gets a ticket with a
//! sequence number; results for any ticket but the latest are dropped, so two
//! quick double-clicks cannot leave the popover showing the older entity.

use crate::record::EntityPropertyRecord;
use ifc_peek_model::{IfcViewer, Result};
use std::cell::Cell;

/// Popover anchor in client (viewport) pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

/// One pick request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickTicket {
    pub seq: u64,
    pub anchor: Anchor,
}

/// Issues pick tickets with increasing sequence numbers
#[derive(Debug, Default)]
pub struct PickCounter {
    next: Cell<u64>,
}

impl PickCounter {
    pub fn issue(&self, anchor: Anchor) -> PickTicket {
        let seq = self.next.get() + 1;
        self.next.set(seq);
        PickTicket { seq, anchor }
    }
}

/// Inspector state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Inspection {
    #[default]
    Idle,
    Picking(PickTicket),
    Displaying {
        anchor: Anchor,
        record: EntityPropertyRecord,
    },
}

impl Inspection {
    /// Record and anchor of the open popover, if any
    pub fn popover(&self) -> Option<(Anchor, &EntityPropertyRecord)> {
        match self {
            Inspection::Displaying { anchor, record } => Some((*anchor, record)),
            _ => None,
        }
    }
}

/// Inspector transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InspectorAction {
    PickStarted(PickTicket),
    /// `None` means nothing was under the cursor
    PickResolved {
        seq: u64,
        record: Option<EntityPropertyRecord>,
    },
    PickFailed { seq: u64 },
    Close,
}

impl Inspection {
    pub fn apply(&mut self, action: InspectorAction) {
        match action {
            InspectorAction::PickStarted(ticket) => {
                *self = Inspection::Picking(ticket);
            }
            InspectorAction::PickResolved { seq, record } => {
                let Inspection::Picking(ticket) = *self else {
                    return;
                };
                if ticket.seq != seq {
                    return;
                }
                *self = match record {
                    Some(record) => Inspection::Displaying {
                        anchor: ticket.anchor,
                        record,
                    },
                    None => Inspection::Idle,
                };
            }
            InspectorAction::PickFailed { seq } => {
                if matches!(self, Inspection::Picking(t) if t.seq == seq) {
                    *self = Inspection::Idle;
                }
            }
            InspectorAction::Close => {
                if matches!(self, Inspection::Displaying { .. }) {
                    *self = Inspection::Idle;
                }
            }
        }
    }
}

/// Options for [`inspect`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InspectOptions {
    pub prefer_nearest: bool,
    pub include_children: bool,
}

/// Pick the entity under the pointer and build its property record
///
/// Returns `Ok(None)` on a miss.
pub async fn pick_record<V: IfcViewer + ?Sized>(
    viewer: &V,
    options: InspectOptions,
) -> Result<Option<EntityPropertyRecord>> {
    let Some(hit) = viewer.pick(options.prefer_nearest).await? else {
        log::debug!("Pick missed");
        return Ok(None);
    };

    let props = viewer.properties(hit, options.include_children).await?;
    let entity_type = viewer.ifc_type(hit).await?;
    log::debug!("Picked {} ({})", hit, entity_type);

    Ok(Some(EntityPropertyRecord::from_properties(
        &entity_type,
        props.as_ref(),
    )))
}

/// Run one inspection, reporting each transition through `dispatch`
pub async fn inspect<V, F>(viewer: &V, ticket: PickTicket, options: InspectOptions, dispatch: F)
where
    V: IfcViewer + ?Sized,
    F: Fn(InspectorAction),
{
    dispatch(InspectorAction::PickStarted(ticket));

    match pick_record(viewer, options).await {
        Ok(record) => dispatch(InspectorAction::PickResolved {
            seq: ticket.seq,
            record,
        }),
        Err(e) => {
            log::error!("Failed to inspect entity: {}", e);
            dispatch(InspectorAction::PickFailed { seq: ticket.seq });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockViewer};
    use ifc_peek_model::{Attribute, AttributeValue, PickHit, PropertyBag, ViewerError};
    use std::cell::RefCell;

    const OPTIONS: InspectOptions = InspectOptions {
        prefer_nearest: true,
        include_children: false,
    };

    fn run(viewer: &MockViewer, state: &RefCell<Inspection>, ticket: PickTicket) {
        pollster::block_on(inspect(viewer, ticket, OPTIONS, |action| {
            state.borrow_mut().apply(action)
        }));
    }

    fn slab_props() -> PropertyBag {
        PropertyBag {
            global_id: Some(Attribute {
                value: Some(AttributeValue::Text("0K4s$2bBT4Kxu1D4ab9Yp1".into())),
            }),
            name: Some(Attribute {
                value: Some(AttributeValue::Text("\\X2\\5E8A\\X0\\-1".into())),
            }),
            object_type: None,
            predefined_type: Some(Attribute {
                value: Some(AttributeValue::Text("FLOOR".into())),
            }),
        }
    }

    #[test]
    fn test_hit_displays_decoded_record() {
        let hit = PickHit::new(0, 88);
        let viewer = MockViewer::picking(Some(hit), "IFCSLAB", Some(slab_props()));
        let state = RefCell::new(Inspection::Idle);
        let ticket = PickCounter::default().issue(Anchor { x: 120, y: 45 });

        run(&viewer, &state, ticket);

        let state = state.into_inner();
        let (anchor, record) = state.popover().unwrap();
        assert_eq!(anchor, Anchor { x: 120, y: 45 });
        assert_eq!(record.name.as_deref(), Some("床-1"));
        assert_eq!(record.entity_type.as_deref(), Some("IFCSLAB"));
        assert_eq!(
            viewer.calls(),
            vec![Call::Pick(true), Call::Properties(hit, false), Call::IfcType(hit)]
        );
    }

    #[test]
    fn test_miss_from_idle_stays_idle() {
        let viewer = MockViewer::picking(None, "", None);
        let state = RefCell::new(Inspection::Idle);
        run(&viewer, &state, PickCounter::default().issue(Anchor::default()));

        assert_eq!(state.into_inner(), Inspection::Idle);
        assert_eq!(viewer.calls(), vec![Call::Pick(true)]);
    }

    #[test]
    fn test_pick_error_returns_to_idle() {
        let viewer = MockViewer::new();
        viewer
            .pick_result
            .replace(Some(Err(ViewerError::pick("raycaster not ready"))));
        let state = RefCell::new(Inspection::Idle);
        run(&viewer, &state, PickCounter::default().issue(Anchor::default()));

        assert_eq!(state.into_inner(), Inspection::Idle);
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let counter = PickCounter::default();
        let first = counter.issue(Anchor { x: 1, y: 1 });
        let second = counter.issue(Anchor { x: 2, y: 2 });
        assert!(second.seq > first.seq);

        let mut state = Inspection::Idle;
        state.apply(InspectorAction::PickStarted(first));
        state.apply(InspectorAction::PickStarted(second));
        state.apply(InspectorAction::PickResolved {
            seq: first.seq,
            record: Some(EntityPropertyRecord::from_properties("IFCWALL", None)),
        });
        assert_eq!(state, Inspection::Picking(second));

        state.apply(InspectorAction::PickFailed { seq: first.seq });
        assert_eq!(state, Inspection::Picking(second));

        state.apply(InspectorAction::PickResolved {
            seq: second.seq,
            record: Some(EntityPropertyRecord::from_properties("IFCDOOR", None)),
        });
        assert_eq!(state.popover().map(|(a, _)| a), Some(Anchor { x: 2, y: 2 }));
    }

    #[test]
    fn test_close_discards_record() {
        let mut state = Inspection::Displaying {
            anchor: Anchor::default(),
            record: EntityPropertyRecord::from_properties("IFCWALL", None),
        };
        state.apply(InspectorAction::Close);
        assert_eq!(state, Inspection::Idle);

        // closing while a pick is pending does not cancel it
        let ticket = PickCounter::default().issue(Anchor::default());
        let mut state = Inspection::Picking(ticket);
        state.apply(InspectorAction::Close);
        assert_eq!(state, Inspection::Picking(ticket));
    }
}
