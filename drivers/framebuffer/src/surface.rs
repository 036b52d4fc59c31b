use common::FrameBufferInfo;
use log::error;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("surface is already locked")]
    AlreadyLocked,
    #[error("surface is not locked")]
    NotLocked,
    /// the memory behind the surface went away, e.g. on a display mode change
    #[error("surface lost")]
    Lost,
}

/// A drawable surface whose pixel memory is only reachable while locked.
pub trait Surface {
    fn info(&self) -> FrameBufferInfo;

    fn lock(&mut self) -> Result<(), SurfaceError>;

    fn unlock(&mut self) -> Result<(), SurfaceError>;

    /// Pixel memory, laid out as described by [`Surface::info`]. Only
    /// meaningful between [`Surface::lock`] and [`Surface::unlock`].
    fn buffer_mut(&mut self) -> &mut [u8];
}

/// Exclusive access to a locked surface. The surface is unlocked when this
/// goes out of scope.
pub struct SurfaceLock<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    info: FrameBufferInfo,
}

impl<'a, S: Surface + ?Sized> SurfaceLock<'a, S> {
    pub fn new(surface: &'a mut S) -> Result<Self, SurfaceError> {
        surface.lock()?;
        let info = surface.info();
        Ok(Self { surface, info })
    }

    pub fn info(&self) -> &FrameBufferInfo {
        &self.info
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.surface.buffer_mut()
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceLock<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.surface.unlock() {
            error!("couldn't unlock surface: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameBuffer;
    use common::PixelFormat;

    #[test]
    fn test_lock_released_on_drop() {
        let mut fb = FrameBuffer::new(2, 2, PixelFormat::Indexed8);
        {
            let mut lock = SurfaceLock::new(&mut fb).unwrap();
            assert_eq!(2, lock.info().width);
            if let Some(p) = lock.buffer_mut().first_mut() {
                *p = 4;
            }
        }
        assert!(!fb.is_locked());
        assert_eq!(1, fb.lock_count());
        assert_eq!(Some(4), fb.pixel(0, 0));
    }

    #[test]
    fn test_failed_lock_does_not_unlock() {
        let mut fb = FrameBuffer::new(2, 2, PixelFormat::Indexed8);
        fb.lock().unwrap();
        assert!(matches!(
            SurfaceLock::new(&mut fb),
            Err(SurfaceError::AlreadyLocked)
        ));
        assert!(fb.is_locked());
    }
}
