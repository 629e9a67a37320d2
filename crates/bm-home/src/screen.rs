use std::rc::Rc;

use bm_core::*;
use bm_ui::remember_scroll_state;

use crate::config::ScreenInputs;
use crate::entrance::{Entrance, EntranceFrame};
use crate::state::{InteractionSnapshot, InteractionState};
use crate::view::{Handlers, HomeModel, HomeScreen};

/// Services the screen borrows from whoever hosts it.
#[derive(Clone)]
pub struct ScreenEnv {
    pub timers: Timers,
    pub alerts: Rc<dyn AlertPresenter>,
    pub animations: bool,
    pub window: Size,
}

/// One mountable instance of the home screen.
///
/// State lives in the composition's remembered slots, so it survives
/// recomposition and is dropped on `unmount`. The next `compose` after an
/// unmount starts a fresh mount: counter 0, idle, entrance from the start.
pub struct Screen {
    composition: Composition,
    props: ScreenInputs,
    env: ScreenEnv,
    state: Option<InteractionState>,
    entrance: EntranceFrame,
    animating: bool,
}

impl Screen {
    pub fn new(props: ScreenInputs, env: ScreenEnv) -> Self {
        Self {
            composition: Composition::new(),
            props,
            env,
            state: None,
            entrance: EntranceFrame::START,
            animating: false,
        }
    }

    /// Build the tree for the current state, mounting first if needed.
    pub fn compose(&mut self) -> View {
        let props = &self.props;
        let env = &self.env;
        let (view, state, entrance, animating) = self.composition.compose(|| {
            let state = remember_with_key("interaction", || {
                InteractionState::new(env.timers.clone(), env.alerts.clone())
            });
            let entrance = remember_state_with_key("entrance", Entrance::new);
            let scroll = remember_scroll_state("content");

            {
                let entrance = entrance.clone();
                let animate = env.animations;
                launched_effect("entrance", move || {
                    log::info!("home screen mounted");
                    entrance.borrow_mut().start(animate);
                    on_unmount(|| log::info!("home screen unmounted"))
                });
            }
            {
                let state = (*state).clone();
                launched_effect("refresh-timer", move || {
                    on_unmount(move || {
                        state.cancel_pending();
                    })
                });
            }

            let animating = entrance.borrow_mut().tick();
            let frame = entrance.borrow().frame();

            let handlers = Handlers {
                on_counter: {
                    let state = (*state).clone();
                    Rc::new(move || {
                        state.increment();
                    })
                },
                on_refresh: {
                    let state = (*state).clone();
                    Rc::new(move || {
                        state.refresh();
                    })
                },
            };
            let model = HomeModel {
                props,
                state: state.snapshot(),
                entrance: frame,
                window: env.window,
            };
            (
                HomeScreen(&model, &handlers, scroll),
                (*state).clone(),
                frame,
                animating,
            )
        });

        self.state = Some(state);
        self.entrance = entrance;
        self.animating = animating;
        view
    }

    pub fn props(&self) -> &ScreenInputs {
        &self.props
    }

    pub fn state(&self) -> Option<&InteractionState> {
        self.state.as_ref()
    }

    pub fn snapshot(&self) -> Option<InteractionSnapshot> {
        self.state.as_ref().map(InteractionState::snapshot)
    }

    /// Entrance values used by the last `compose`.
    pub fn entrance(&self) -> EntranceFrame {
        self.entrance
    }

    /// `true` while the entrance animation still needs frames.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_mounted(&self) -> bool {
        self.composition.is_mounted()
    }

    /// Tear down: cancels pending timers and forgets all state.
    pub fn unmount(&mut self) {
        self.composition.unmount();
        self.state = None;
        self.entrance = EntranceFrame::START;
        self.animating = false;
    }
}
