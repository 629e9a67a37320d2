pub use crate::alert::{Alert, AlertPresenter, AlertQueue};
pub use crate::animation::{
    AnimatedValue, AnimationSpec, Clock, Easing, Interpolate, SystemClock, TestClock, set_clock,
};
pub use crate::color::Color;
pub use crate::effects::{Dispose, effect, launched_effect, on_unmount};
pub use crate::error::{Error, Result};
pub use crate::geometry::{Rect, Size, Transform, Vec2};
pub use crate::modifier::{CornerRadii, Modifier, PaddingValues};
pub use crate::runtime::{
    Composition, Frame, HitRegion, remember, remember_state_with_key,
    remember_with_key,
};
pub use crate::scope::{Scope, current_scope};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{TimerHandle, Timers};
pub use crate::view::{
    FontWeight, Scene, SceneNode, TextAlign, TextStyle, View, ViewId, ViewKind,
};
pub use taffy::{AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
