use std::cell::Cell;
use std::rc::Rc;

use crate::Rect;

/// 控件当前在屏幕上的轨道区域。
///
/// 控件每帧写入，控制器在换算指针位置时现读，不做缓存。
#[derive(Clone, Default, Debug)]
pub struct GeometryHandle(Rc<Cell<Option<Rect>>>);

impl GeometryHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, rect: Rect) {
        self.0.set(Some(rect));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<Rect> {
        self.0.get()
    }
}
