use yew::prelude::*;

use crate::services::session;

/// Usuario local de la sesión: un nombre para mostrar, nada más.
#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub current_user: Option<String>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

impl UseSessionHandle {
    pub fn is_owner(&self, usuario: &str) -> bool {
        self.current_user.as_deref() == Some(usuario)
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let current_user = use_state(|| None::<String>);

    // Restaurar usuario guardado al montar
    {
        let current_user = current_user.clone();
        use_effect_with((), move |_| {
            if let Some(user) = session::current_user() {
                log::info!("✅ Usuario restaurado: {}", user);
                current_user.set(Some(user));
            }
            || ()
        });
    }

    let login = {
        let current_user = current_user.clone();
        Callback::from(move |username: String| {
            session::save_user(&username);
            current_user.set(Some(username));
        })
    };

    let logout = {
        let current_user = current_user.clone();
        Callback::from(move |_| {
            session::clear_user();
            current_user.set(None);
        })
    };

    UseSessionHandle {
        current_user: (*current_user).clone(),
        login,
        logout,
    }
}
