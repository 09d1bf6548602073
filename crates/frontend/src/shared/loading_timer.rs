use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Не больше одного отложенного таймера на владельца.
///
/// Новый `schedule` сбрасывает предыдущий [`Timeout`] (drop отменяет его в
/// браузере). При очистке владельца ожидающий таймер тоже сбрасывается, так
/// что колбэк не сработает после размонтирования компонента.
pub struct RestartableTimeout<H: 'static = Timeout> {
    handle: StoredValue<Option<H>, LocalStorage>,
}

impl<H: 'static> Clone for RestartableTimeout<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for RestartableTimeout<H> {}

impl<H: 'static> RestartableTimeout<H> {
    pub fn new() -> Self {
        let handle = StoredValue::new_local(None::<H>);
        on_cleanup(move || {
            handle.try_update_value(|pending| {
                pending.take();
            });
        });
        Self { handle }
    }

    /// Заменяет ожидающий handle, старый уничтожается.
    pub fn arm(&self, pending: H) {
        self.handle.set_value(Some(pending));
    }
}

impl RestartableTimeout<Timeout> {
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.arm(Timeout::new(delay_ms, callback));
    }
}

impl Default for RestartableTimeout<Timeout> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Считает уничтоженные handle
    struct DropCounter(Rc<Cell<u32>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_rearm_drops_previous_handle() {
        let drops = Rc::new(Cell::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let timer = RestartableTimeout::<DropCounter>::new();
            timer.arm(DropCounter(drops.clone()));
            assert_eq!(drops.get(), 0);

            timer.arm(DropCounter(drops.clone()));
            assert_eq!(drops.get(), 1);
        });
        owner.cleanup();
    }

    #[test]
    fn test_owner_cleanup_drops_pending_handle() {
        let drops = Rc::new(Cell::new(0));
        let owner = Owner::new();
        owner.with(|| {
            let timer = RestartableTimeout::<DropCounter>::new();
            timer.arm(DropCounter(drops.clone()));
        });
        assert_eq!(drops.get(), 0);

        owner.cleanup();
        assert_eq!(drops.get(), 1);
    }
}
