use crate::actions::{ActionError, ActionValue, ReducerGroup};
use crate::state::{AppState, HardwareState};
use crate::ui::mvi::Reducer;

use super::intent::HardwareIntent;

pub struct HardwareReducer;

impl Reducer for HardwareReducer {
    type State = AppState;
    type Intent = HardwareIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let hardware = state.hardware;
        let hardware = match intent {
            HardwareIntent::WarmUp(value) => HardwareState {
                warming_up: hardware.warming_up.request(value),
                ..hardware
            },
            HardwareIntent::ResetDisplay(value) => HardwareState {
                resetting_display: hardware.resetting_display.request(value),
                ..hardware
            },
        };
        AppState { hardware, ..state }
    }
}

impl ReducerGroup for HardwareReducer {
    const NAME: &'static str = "hardware";
    const OPERATIONS: &'static [&'static str] = &["warm_up", "reset_display"];

    fn decode(action: &str, value: ActionValue) -> Result<HardwareIntent, ActionError> {
        match action {
            "warm_up" => Ok(HardwareIntent::WarmUp(value.into_flag(action)?)),
            "reset_display" => Ok(HardwareIntent::ResetDisplay(value.into_flag(action)?)),
            _ => Err(ActionError::UnknownOperation {
                group: Self::NAME,
                action: action.to_string(),
            }),
        }
    }
}
