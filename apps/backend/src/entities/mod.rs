pub mod game_participants;
pub mod games;
pub mod players;
pub mod rolls;

pub use game_participants::Entity as GameParticipants;
pub use game_participants::Model as GameParticipant;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use rolls::Entity as Rolls;
pub use rolls::Model as Roll;
