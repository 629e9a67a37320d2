use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A modal, dismissible acknowledgment with a fixed title and a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// The host's alert/dialog facility.
pub trait AlertPresenter {
    fn present(&self, alert: Alert);
}

/// FIFO of alerts waiting to be shown; the front one is on screen.
#[derive(Clone, Default)]
pub struct AlertQueue {
    queue: Rc<RefCell<VecDeque<Alert>>>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn front(&self) -> Option<Alert> {
        self.queue.borrow().front().cloned()
    }

    /// Dismiss the alert on screen, revealing the next one.
    pub fn dismiss(&self) -> Option<Alert> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn snapshot(&self) -> Vec<Alert> {
        self.queue.borrow().iter().cloned().collect()
    }

    pub fn drain(&self) -> Vec<Alert> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl AlertPresenter for AlertQueue {
    fn present(&self, alert: Alert) {
        log::info!("alert: {} / {}", alert.title, alert.message);
        self.queue.borrow_mut().push_back(alert);
    }
}

impl<P: AlertPresenter + ?Sized> AlertPresenter for Rc<P> {
    fn present(&self, alert: Alert) {
        (**self).present(alert)
    }
}
