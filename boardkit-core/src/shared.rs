//! Lock-guarded board descriptor
//!
//! [`BoardDescriptor`] is used through `&mut self`, which is enough while a
//! single flow of control owns it. When tasks, interrupt handlers or cores
//! need the same board (and in particular the same onboard LED and button),
//! wrap it in a [`SharedBoard`] and pick the raw mutex that matches the
//! execution model:
//!
//! - `NoopRawMutex`: single thread, no interrupts touching the board
//! - `CriticalSectionRawMutex`: shared with interrupts or other cores
//!
//! ```ignore
//! static BOARD: StaticCell<SharedBoard<CriticalSectionRawMutex, ChipDrivers>> = StaticCell::new();
//!
//! board.lock(|b| b.named_led().toggle());
//! ```

use core::cell::RefCell;

use boardkit_hal::driver::PeripheralDrivers;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::board::BoardDescriptor;

/// A [`BoardDescriptor`] behind a blocking mutex
pub struct SharedBoard<'a, M: RawMutex, D: PeripheralDrivers> {
    inner: Mutex<M, RefCell<BoardDescriptor<'a, D>>>,
}

impl<'a, M: RawMutex, D: PeripheralDrivers> SharedBoard<'a, M, D> {
    /// Wrap a descriptor
    pub fn new(board: BoardDescriptor<'a, D>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(board)),
        }
    }

    /// Run `f` with exclusive access to the descriptor
    ///
    /// # Panics
    ///
    /// Calling `lock` again from inside `f` panics.
    pub fn lock<R>(&self, f: impl FnOnce(&mut BoardDescriptor<'a, D>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Unwrap the descriptor
    pub fn into_inner(self) -> BoardDescriptor<'a, D> {
        self.inner.into_inner().into_inner()
    }
}
