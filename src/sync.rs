use lazy_static::lazy_static;
use parking_lot::ReentrantMutex;

lazy_static! {
    pub(crate) static ref LIBRARY_INIT: () = {
        // No functions called here must try to create the LOCK,
        // as this could cause a deadlock in initialisation
        let version = unsafe { crate::util::string_from_cstr(::ncdf_sys::nc_inq_libvers()) };
        tracing::debug!(%version, "netCDF library initialised");
    };
}

/// Guards the execution of the provided closure with a recursive static mutex.
///
/// The netCDF C library keeps process-wide state (its table of open datasets), so every
/// call into it is serialized through this lock.
pub fn sync<T, F>(func: F) -> T
where
    F: FnOnce() -> T,
{
    lazy_static! {
        static ref LOCK: ReentrantMutex<()> = {
            lazy_static::initialize(&LIBRARY_INIT);
            ReentrantMutex::new(())
        };
    }
    let _guard = LOCK.lock();
    func()
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use parking_lot::ReentrantMutex;

    #[test]
    pub fn test_reentrant_mutex() {
        lazy_static! {
            static ref LOCK: ReentrantMutex<()> = ReentrantMutex::new(());
        }
        let g1 = LOCK.try_lock();
        assert!(g1.is_some());
        let g2 = LOCK.lock();
        assert_eq!(*g2, ());
        let g3 = LOCK.try_lock();
        assert!(g3.is_some());
    }

    #[test]
    pub fn test_nested_sync() {
        let value = super::sync(|| super::sync(|| 42));
        assert_eq!(value, 42);
    }
}
