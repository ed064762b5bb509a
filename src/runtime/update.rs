use crate::runtime::msg::Msg;
use crate::runtime::{Effects, Env};

pub trait Update<E: Env> {
    fn update(&mut self, msg: &Msg) -> Effects;
}
