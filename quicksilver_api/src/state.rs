use quicksilver_dispatch::GreedySolver;

pub struct AppState {
    pub solver: GreedySolver,
}
