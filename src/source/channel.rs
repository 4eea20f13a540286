use crossbeam_channel::Receiver;

use super::IntoEnumerator;
use crate::{Enumerator, exit::Flow};

/// Values received from a channel until every sender is gone.
///
/// A channel is single-pass: a second run yields only what arrives after the
/// first one stopped.
#[derive(Debug, Clone)]
pub struct Received<T>(Receiver<T>);

impl<T> Enumerator for Received<T> {
    type Item = T;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(T) -> Flow,
    {
        for item in self.0.iter() {
            emit(item)?;
        }
        Ok(())
    }
}

impl<T> IntoEnumerator for Receiver<T> {
    type Item = T;
    type IntoEnum = Received<T>;

    fn into_enumerator(self) -> Received<T> {
        Received(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Enumerator;
    use crate::source::from;
    use crossbeam_channel::{bounded, unbounded};
    use std::thread;

    #[test]
    fn test_receives_until_disconnected() {
        let (tx, rx) = bounded(0);
        let producer = thread::spawn(move || {
            for s in ["Funa", "1-hachi", "2-hachi"] {
                tx.send(s).expect("receiver alive");
            }
        });

        assert_eq!(from(rx).to_vec().unwrap(), vec!["Funa", "1-hachi", "2-hachi"]);
        producer.join().expect("producer finished");
    }

    #[test]
    fn test_take_leaves_rest_in_channel() {
        let (tx, rx) = unbounded();
        for n in 0..5 {
            tx.send(n).expect("receiver alive");
        }
        drop(tx);

        let seq = from(rx);
        assert_eq!((&seq).take(2).to_vec().unwrap(), vec![0, 1]);
        assert_eq!(seq.to_vec().unwrap(), vec![2, 3, 4]);
    }
}
