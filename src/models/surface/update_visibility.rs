use crate::constants::CONTROLS_HIDE_DELAY;
use crate::models::common::eq_update;
use crate::runtime::msg::{Action, ActionVisibility, Internal, Msg};
use crate::runtime::{EffectFuture, Effects, Env, EnvFutureExt};
use derivative::Derivative;
use futures::FutureExt;
use serde::Serialize;

/// Hover-driven auto-hide policy for the control overlay.
///
/// Controls start visible so first-time users discover them. A countdown
/// is armed at mount and re-armed on every hover-leave; hover-enter shows
/// the controls immediately and invalidates any pending countdown by
/// bumping `hide_epoch`.
#[derive(Derivative, Clone, PartialEq, Eq, Serialize, Debug)]
#[derivative(Default)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityState {
    #[derivative(Default(value = "true"))]
    pub visible: bool,
    pub hovered: bool,
    /// An exclusive external mode (e.g. picture-in-picture) is active;
    /// hiding is inhibited entirely, becoming visible is still allowed.
    pub suppress_hide: bool,
    #[serde(skip)]
    pub hide_epoch: u64,
}

pub fn update_visibility<E: Env + 'static>(
    visibility: &mut VisibilityState,
    revision: u64,
    msg: &Msg,
) -> Effects {
    match msg {
        Msg::Action(Action::Visibility(ActionVisibility::HoverEnter)) => {
            visibility.hide_epoch += 1;
            let hovered_effects = eq_update(&mut visibility.hovered, true);
            let visible_effects = eq_update(&mut visibility.visible, true);
            hovered_effects.join(visible_effects)
        }
        Msg::Action(Action::Visibility(ActionVisibility::HoverLeave)) => {
            let hovered_effects = eq_update(&mut visibility.hovered, false);
            hovered_effects.join(start_hide_countdown::<E>(visibility, revision))
        }
        Msg::Action(Action::Visibility(ActionVisibility::SetSuppressHide(suppress))) => {
            let suppress_effects = eq_update(&mut visibility.suppress_hide, *suppress);
            if *suppress {
                visibility.hide_epoch += 1;
                suppress_effects
            } else if !visibility.hovered {
                // Clearing suppression restarts the countdown from this
                // moment, not from the original idle start.
                suppress_effects.join(start_hide_countdown::<E>(visibility, revision))
            } else {
                suppress_effects
            }
        }
        Msg::Internal(Internal::HideControlsTimeout(result_revision, epoch))
            if *result_revision == revision && *epoch == visibility.hide_epoch =>
        {
            if visibility.hovered || visibility.suppress_hide {
                Effects::none().unchanged()
            } else {
                eq_update(&mut visibility.visible, false)
            }
        }
        _ => Effects::none().unchanged(),
    }
}

pub fn start_hide_countdown<E: Env + 'static>(
    visibility: &mut VisibilityState,
    revision: u64,
) -> Effects {
    visibility.hide_epoch += 1;
    let epoch = visibility.hide_epoch;
    Effects::future(EffectFuture::Concurrent(
        E::sleep(CONTROLS_HIDE_DELAY)
            .map(move |_| Msg::Internal(Internal::HideControlsTimeout(revision, epoch)))
            .boxed_env(),
    ))
    .unchanged()
}
