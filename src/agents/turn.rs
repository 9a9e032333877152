use super::*;
use crate::Points;
use crate::game::*;
use crate::scoring::Category;
use crate::scoring::score;
use std::sync::Arc;

/// Who a turn is being played for.
#[derive(Clone)]
pub struct Seat {
    name: String,
    agent: Arc<dyn Agent>,
    epoch: u64,
}

impl From<(String, Arc<dyn Agent>, u64)> for Seat {
    fn from((name, agent, epoch): (String, Arc<dyn Agent>, u64)) -> Self {
        Self { name, agent, epoch }
    }
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// One automated turn, run on its own task while holding the gate.
///
/// - roll, think, decide holds, think; up to three times
/// - score the agent's chosen category
/// - reset the dice, conclude the game if it is over, open the gate,
///   then hand the table on
///
/// The agent plays on an inner task so a panic comes back as a fault like
/// any other error. Faults reset the dice and open the gate before they
/// are published.
pub struct Turn {
    table: Table,
    seat: Seat,
    guard: GateGuard,
}

impl Turn {
    pub fn spawn(table: Table, seat: Seat, guard: GateGuard) {
        tokio::spawn(Self { table, seat, guard }.run());
    }

    async fn run(self) {
        let Self { table, seat, guard } = self;
        log::debug!("[turn] {} ({}) takes a turn", seat.name, seat.agent.name());
        let played = tokio::spawn({
            let table = table.clone();
            let seat = seat.clone();
            async move { Self::play(&table, &seat).await }
        })
        .await
        .map_err(anyhow::Error::from)
        .and_then(|result| result);
        table.reset_dice();
        match played {
            Ok((category, points)) => {
                log::debug!(
                    "[turn] {} ({}) scores {} in {}",
                    seat.name,
                    seat.agent.name(),
                    points,
                    category
                );
                let ongoing = table.wrap_up(seat.epoch);
                drop(guard);
                if ongoing {
                    table.next_turn().await;
                }
            }
            Err(ref e) => {
                drop(guard);
                table.fault(Fault::from((seat.name.as_str(), e)));
            }
        }
    }

    async fn play(table: &Table, seat: &Seat) -> anyhow::Result<(Category, Points)> {
        let agent = seat.agent.as_ref();
        let think = table.think_time();
        while table.rolls_left() > 0 {
            let roll = table.roll_dice()?;
            tokio::time::sleep(think).await;
            let held = table.holds();
            let wanted = agent.holds(&roll, &held).await;
            for (index, _) in wanted.iter().enumerate().filter(|(_, hold)| **hold) {
                table.hold(index)?;
            }
            tokio::time::sleep(think).await;
        }
        let roll = table.current_roll();
        let open = table.open_categories()?;
        let category = agent
            .category(&roll, &open)
            .await
            .ok_or_else(|| anyhow::anyhow!("{} found no category to score", agent.name()))?;
        let points = score(category, &roll);
        table.commit(seat, category, points)?;
        Ok((category, points))
    }
}
