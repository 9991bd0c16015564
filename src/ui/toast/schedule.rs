// SPDX-License-Identifier: MPL-2.0
//! Delayed lifecycle steps.
//!
//! `show` never blocks: it hands two [`Step`]s to a [`Scheduler`], which
//! delivers each one back to the UI loop once its delay has elapsed. Steps are
//! independent; the removal does not wait for the fade-out.

use super::message::Message;
use super::toast::ToastId;
use iced::Task;
use std::time::Duration;

/// A scheduled lifecycle callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Start fading out (no-op for non-animated toasts).
    BeginDismiss(ToastId),
    /// Detach from the container and drop.
    Remove(ToastId),
}

impl Step {
    #[must_use]
    pub fn toast_id(&self) -> ToastId {
        match *self {
            Step::BeginDismiss(id) | Step::Remove(id) => id,
        }
    }
}

/// Something that can run a step after a delay on the UI loop.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, step: Step);
}

/// Records steps with their delays; handy for driving a virtual clock.
impl Scheduler for Vec<(Duration, Step)> {
    fn schedule(&mut self, delay: Duration, step: Step) {
        self.push((delay, step));
    }
}

/// Produces `message` on the UI loop after `after` has elapsed.
pub fn delay<M>(after: Duration, message: M) -> Task<M>
where
    M: Send + 'static,
{
    Task::perform(
        async move {
            tokio::time::sleep(after).await;
            message
        },
        std::convert::identity,
    )
}

/// Collects scheduled steps as Iced tasks.
#[derive(Default)]
pub struct TaskScheduler {
    tasks: Vec<Task<Message>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps scheduled so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Batches every scheduled step into one task.
    #[must_use]
    pub fn into_task(self) -> Task<Message> {
        Task::batch(self.tasks)
    }
}

impl Scheduler for TaskScheduler {
    fn schedule(&mut self, after: Duration, step: Step) {
        self.tasks.push(delay(after, Message::Step(step)));
    }
}
