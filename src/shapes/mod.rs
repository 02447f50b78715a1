// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Control point shapes for round objects

pub mod cone;
pub mod radius;

pub use cone::{ConeCommit, ConeConfig, ConeControl, ConeState};
pub use radius::{RadiusCommit, RadiusConfig, RadiusControl, RadiusState};

use crate::model::{Dispatch, SceneAction, SceneObject};

/// Dispatch one update replacing `committed` by `next`, unless nothing
/// changed. Returns whether an action was dispatched.
pub(crate) fn commit_if_changed<D: Dispatch + ?Sized>(
    dispatcher: &mut D,
    committed: &SceneObject,
    next: SceneObject,
) -> bool {
    if next == *committed {
        tracing::debug!("Commit: {} unchanged, nothing dispatched", committed.id());
        return false;
    }
    dispatcher.dispatch(SceneAction::Update(vec![next]));
    true
}
