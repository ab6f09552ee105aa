//! WebAssembly bindings for the camel race engine.
//!
//! This module exposes the game engine to JavaScript through wasm-bindgen.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::Command;
#[cfg(feature = "wasm")]
use crate::config::GameConfig;
#[cfg(feature = "wasm")]
use crate::game::Game;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game. A missing seed draws one from the browser's entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(player_count: u8, seed: Option<u64>) -> Result<WasmGame, JsValue> {
        let game = Game::new(GameConfig { player_count, seed })
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(WasmGame { game })
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        self.game
            .snapshot()
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Apply a command from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyTurn)]
    pub fn apply_turn(&mut self, player: u8, command_json: &str) -> Result<String, JsValue> {
        let command: Command = serde_json::from_str(command_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid command JSON: {}", e)))?;

        match self.game.apply_turn(player, command) {
            Ok(events) => Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())),
            Err(e) => Err(JsValue::from_str(&format!("Command failed: {}", e))),
        }
    }

    /// Score the finished round (or the race), returns events JSON or error
    #[wasm_bindgen(js_name = completeRound)]
    pub fn complete_round(&mut self) -> Result<String, JsValue> {
        match self.game.complete_round() {
            Ok(events) => Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())),
            Err(e) => Err(JsValue::from_str(&format!("Scoring failed: {}", e))),
        }
    }

    /// Whether the round or race is waiting to be scored
    #[wasm_bindgen(js_name = needsScoring)]
    pub fn needs_scoring(&self) -> bool {
        self.game.needs_scoring()
    }

    /// Check if final scoring is done
    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Get the winner (if the game is over)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.game.winner()
    }

    /// Get a player's points
    #[wasm_bindgen(js_name = getPoints)]
    pub fn get_points(&self, player: u8) -> Option<i32> {
        self.game.player(player).map(|p| p.points)
    }
}
